pub mod base;
pub mod html;

pub use base::Parser;
pub use html::VacancyParser;
