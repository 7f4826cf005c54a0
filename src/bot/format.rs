use crate::core::VacancyRecord;

pub const CITY_LABEL: &str = "Місто: ";
pub const SALARY_LABEL: &str = "Зарплата: ";

/// Escapes text for Telegram's HTML parse mode.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Linked title, then the city and salary lines.
pub fn format_card(record: &VacancyRecord) -> String {
    format!(
        "<a href=\"{}\">{}</a>\n<b>{}</b>{}\n<b>{}</b>{}",
        escape_html(record.link()),
        escape_html(record.title()),
        CITY_LABEL,
        escape_html(record.city()),
        SALARY_LABEL,
        escape_html(record.salary()),
    )
}
