use scraper::ElementRef;

const NBSP: char = '\u{a0}';

/// Trims the string and swaps non-breaking spaces for plain ones.
/// Runs of inner whitespace are left as they are.
pub fn normalize_text(raw: &str) -> String {
    raw.trim().replace(NBSP, " ")
}

/// All descendant text of `element`, normalized.
pub fn element_text(element: ElementRef<'_>) -> String {
    normalize_text(&element.text().collect::<String>())
}
