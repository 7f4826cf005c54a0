pub mod http_scraper;
pub mod mock_scraper;
pub mod vacancy_fetcher;

mod scraper;
pub use http_scraper::HttpScraper;
pub use mock_scraper::{MockResponse, MockScraper};
pub use scraper::Scraper;
pub use vacancy_fetcher::VacancyFetcher;
