pub mod config;
mod errors;
pub mod language;
mod service;
pub mod vacancy;

pub use config::Config;
pub use errors::{FetchError, ScraperError, ScraperResult};
pub use language::Language;
pub use service::JobService;
pub use vacancy::VacancyRecord;
