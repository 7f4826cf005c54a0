use std::fmt;
use std::str::FromStr;

use super::ScraperError;

/// Categories offered on the bot keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Java,
    Python,
    Ruby,
    Sql,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Java,
        Language::Python,
        Language::Ruby,
        Language::Sql,
    ];

    /// Query-string value understood by the listing endpoint.
    pub fn slug(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Python => "python",
            Language::Ruby => "ruby",
            Language::Sql => "sql",
        }
    }

    /// Keyboard button text.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Java => "Java",
            Language::Python => "Python",
            Language::Ruby => "Ruby",
            Language::Sql => "SQL",
        }
    }
}

impl FromStr for Language {
    type Err = ScraperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.slug() == wanted)
            .ok_or_else(|| ScraperError::Config(format!("unknown language category: {}", s)))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("SQL".parse::<Language>().unwrap(), Language::Sql);
        assert_eq!("python".parse::<Language>().unwrap(), Language::Python);
        assert_eq!(" Java ".parse::<Language>().unwrap(), Language::Java);
        assert!("cobol".parse::<Language>().is_err());
    }

    #[test]
    fn test_labels_round_trip_to_slugs() {
        for lang in Language::ALL {
            assert_eq!(lang.label().parse::<Language>().unwrap(), lang);
            assert_eq!(lang.slug(), lang.label().to_lowercase());
        }
    }
}
