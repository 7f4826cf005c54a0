pub mod bot;
pub mod core;
pub mod http;
pub mod parser;
pub mod scrapers;
pub mod stats;
pub mod storage;

pub use self::core::{
    Config, FetchError, JobService, Language, ScraperError, ScraperResult, VacancyRecord,
};
pub use http::{HttpRequest, HttpResponse};
pub use parser::{Parser, VacancyParser};
pub use scrapers::{HttpScraper, Scraper, VacancyFetcher};
pub use stats::StatsTracker;
pub use storage::{JsonFileRepository, VacancyRepository};
