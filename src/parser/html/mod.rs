mod text;
mod vacancy_parser;

pub use text::{element_text, normalize_text};
pub use vacancy_parser::{VacancyParser, VacancySelectors};
