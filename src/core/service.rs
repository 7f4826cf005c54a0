use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use log::{error, info};

use super::{ScraperResult, VacancyRecord};
use crate::parser::Parser;
use crate::scrapers::VacancyFetcher;
use crate::stats::{FetchOutcome, StatsTracker};
use crate::storage::VacancyRepository;

/// Fetch, parse and persist the vacancies of one category.
pub struct JobService {
    fetcher: VacancyFetcher,
    parser: Arc<dyn Parser>,
    repository: Arc<dyn VacancyRepository>,
    stats: StatsTracker,
}

impl JobService {
    pub fn new(
        fetcher: VacancyFetcher,
        parser: Arc<dyn Parser>,
        repository: Arc<dyn VacancyRepository>,
    ) -> Self {
        Self {
            fetcher,
            parser,
            repository,
            stats: StatsTracker::new(),
        }
    }

    pub fn stats(&self) -> &StatsTracker {
        &self.stats
    }

    /// Runs the pipeline for `language` and returns the records in page order.
    ///
    /// The records are returned only once they have been written to
    /// `destination` (or the repository default). A fetch failure is
    /// returned as-is and nothing is saved.
    pub async fn get_jobs(
        &self,
        language: &str,
        destination: Option<&Path>,
    ) -> ScraperResult<Vec<VacancyRecord>> {
        let slug = language.trim().to_lowercase();
        info!("Getting jobs for '{}'", slug);

        let start_time = Utc::now();
        let fetched = self.fetcher.fetch(&slug).await;
        let duration = Utc::now().signed_duration_since(start_time);

        let body = match fetched {
            Ok(body) => {
                self.stats
                    .record_fetch(&slug, FetchOutcome::Success { bytes: body.len() }, duration);
                body
            }
            Err(err) => {
                self.stats.record_fetch(
                    &slug,
                    FetchOutcome::Failed {
                        status: err.status(),
                    },
                    duration,
                );
                error!("Fetching '{}' failed: {}", slug, err);
                return Err(err.into());
            }
        };

        let records = self.parser.parse(&body);
        self.stats.record_parsed(records.len());

        match self.repository.save(&records, destination).await {
            Ok(path) => {
                self.stats.record_save(true);
                info!(
                    "Stored {} '{}' vacancies in {}",
                    records.len(),
                    slug,
                    path.display()
                );
            }
            Err(err) => {
                self.stats.record_save(false);
                error!("Persisting '{}' vacancies failed: {}", slug, err);
                return Err(err.into());
            }
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FetchError, ScraperError};
    use crate::parser::VacancyParser;
    use crate::scrapers::{MockResponse, MockScraper};
    use crate::storage::{JsonFileRepository, StorageError};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::path::PathBuf;

    const TWO_LISTINGS: &str = r#"
        <ul>
          <li class="l-vacancy">
            <a class="vt" href="https://jobs.dou.ua/v/1/">Python Developer</a>
            <span class="cities">Київ</span>
            <span class="salary">$2000</span>
            <div class="sh-info">Django</div>
          </li>
          <li class="l-vacancy">
            <a class="vt" href="https://jobs.dou.ua/v/2/">ML Engineer</a>
            <span class="cities">Львів</span>
            <div class="sh-info">PyTorch</div>
          </li>
        </ul>"#;

    #[derive(Default)]
    struct RecordingRepository {
        saves: Mutex<Vec<(Vec<VacancyRecord>, Option<PathBuf>)>>,
        fail: bool,
    }

    #[async_trait]
    impl VacancyRepository for RecordingRepository {
        async fn save(
            &self,
            records: &[VacancyRecord],
            destination: Option<&Path>,
        ) -> Result<PathBuf, StorageError> {
            self.saves
                .lock()
                .push((records.to_vec(), destination.map(Path::to_path_buf)));
            if self.fail {
                return Err(StorageError::io(
                    "work.json",
                    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
                ));
            }
            Ok(destination.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("work.json")))
        }

        async fn load(&self, _: Option<&Path>) -> Result<Vec<VacancyRecord>, StorageError> {
            Ok(self
                .saves
                .lock()
                .last()
                .map(|(records, _)| records.clone())
                .unwrap_or_default())
        }
    }

    fn service(
        responses: Vec<MockResponse>,
        repository: Arc<dyn VacancyRepository>,
    ) -> (JobService, MockScraper) {
        let scraper = MockScraper::new(responses);
        let fetcher = VacancyFetcher::new(Arc::new(scraper.clone()));
        let parser = Arc::new(VacancyParser::new().unwrap());
        (JobService::new(fetcher, parser, repository), scraper)
    }

    #[tokio::test]
    async fn test_saves_then_returns_records() {
        let repo = Arc::new(RecordingRepository::default());
        let (service, _) = service(vec![MockResponse::ok(TWO_LISTINGS)], repo.clone());

        let records = service.get_jobs("python", None).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].salary(), crate::core::vacancy::FALLBACK_SALARY);
        let saves = repo.saves.lock();
        assert_eq!(saves.len(), 1);
        assert_eq!(saves[0].0, records);
        assert_eq!(saves[0].1, None);
    }

    #[tokio::test]
    async fn test_fetch_error_skips_save() {
        let repo = Arc::new(RecordingRepository::default());
        let (service, _) = service(vec![MockResponse::status(404)], repo.clone());

        let err = service.get_jobs("python", None).await.unwrap_err();

        assert!(matches!(err, ScraperError::Fetch(FetchError::Status(404))));
        assert!(repo.saves.lock().is_empty());
        assert_eq!(service.stats().get_stats().failed_fetches, 1);
    }

    #[tokio::test]
    async fn test_empty_page_still_saved() {
        let repo = Arc::new(RecordingRepository::default());
        let (service, _) = service(vec![MockResponse::ok("<html></html>")], repo.clone());

        let records = service.get_jobs("ruby", None).await.unwrap();

        assert!(records.is_empty());
        let saves = repo.saves.lock();
        assert_eq!(saves.len(), 1);
        assert!(saves[0].0.is_empty());
    }

    #[tokio::test]
    async fn test_language_is_lowercased_for_url() {
        let repo = Arc::new(RecordingRepository::default());
        let (service, scraper) = service(vec![MockResponse::ok("")], repo);

        service.get_jobs("SQL", None).await.unwrap();

        let requests = scraper.requests();
        assert!(requests[0].url.as_str().ends_with("?category=sql"));
    }

    #[tokio::test]
    async fn test_destination_forwarded() {
        let repo = Arc::new(RecordingRepository::default());
        let (service, _) = service(vec![MockResponse::ok(TWO_LISTINGS)], repo.clone());

        let dest = PathBuf::from("python.json");
        service.get_jobs("python", Some(&dest)).await.unwrap();

        assert_eq!(repo.saves.lock()[0].1, Some(dest));
    }

    #[tokio::test]
    async fn test_storage_error_propagates() {
        let repo = Arc::new(RecordingRepository {
            fail: true,
            ..Default::default()
        });
        let (service, _) = service(vec![MockResponse::ok(TWO_LISTINGS)], repo);

        let err = service.get_jobs("java", None).await.unwrap_err();

        assert!(matches!(err, ScraperError::Storage(StorageError::Io { .. })));
        assert_eq!(service.stats().get_stats().failed_saves, 1);
    }

    #[tokio::test]
    async fn test_writes_json_file() {
        let dir = std::env::temp_dir().join(format!("jobfeed-service-{}", uuid::Uuid::now_v7()));
        let repo = Arc::new(JsonFileRepository::new(dir.join("work.json")));
        let (service, _) = service(vec![MockResponse::ok(TWO_LISTINGS)], repo.clone());

        let records = service.get_jobs("python", None).await.unwrap();

        assert_eq!(repo.load(None).await.unwrap(), records);
    }
}
