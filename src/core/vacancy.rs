use serde::{Deserialize, Serialize};

pub const FALLBACK_TITLE: &str = "Без назви";
pub const FALLBACK_CITY: &str = "Місто не вказано";
pub const FALLBACK_SALARY: &str = "Зарплата не вказана";
pub const FALLBACK_INFO: &str = "Інформація не вказана";

/// A single vacancy as listed on the category page.
///
/// Field order here is the key order of the persisted JSON objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacancyRecord {
    title: String,
    city: String,
    salary: String,
    info: String,
    link: String,
}

impl VacancyRecord {
    pub fn new(
        title: impl Into<String>,
        city: impl Into<String>,
        salary: impl Into<String>,
        info: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            city: city.into(),
            salary: salary.into(),
            info: info.into(),
            link: link.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn salary(&self) -> &str {
        &self.salary
    }

    pub fn info(&self) -> &str {
        &self.info
    }

    pub fn link(&self) -> &str {
        &self.link
    }
}
