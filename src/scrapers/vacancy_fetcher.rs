use std::sync::Arc;

use log::warn;
use url::Url;

use super::http_scraper::DEFAULT_USER_AGENT;
use super::Scraper;
use crate::core::config::DEFAULT_BASE_URL;
use crate::core::FetchError;
use crate::http::HttpRequest;

/// Downloads the vacancy listing page for one category.
#[derive(Clone)]
pub struct VacancyFetcher {
    scraper: Arc<dyn Scraper>,
    base_url: String,
}

impl VacancyFetcher {
    pub fn new(scraper: Arc<dyn Scraper>) -> Self {
        Self::with_base_url(scraper, DEFAULT_BASE_URL)
    }

    /// `base_url` is used as a prefix: the slug is appended verbatim.
    pub fn with_base_url(scraper: Arc<dyn Scraper>, base_url: impl Into<String>) -> Self {
        Self {
            scraper,
            base_url: base_url.into(),
        }
    }

    pub fn listing_url(&self, slug: &str) -> Result<Url, FetchError> {
        Ok(Url::parse(&format!("{}{}", self.base_url, slug))?)
    }

    pub fn build_request(&self, slug: &str) -> Result<HttpRequest, FetchError> {
        Ok(HttpRequest::new(self.listing_url(slug)?)
            .with_header("Accept", "*/*")
            .with_header("User-Agent", DEFAULT_USER_AGENT))
    }

    pub async fn fetch(&self, slug: &str) -> Result<String, FetchError> {
        let request = self.build_request(slug)?;
        let response = self.scraper.fetch(request).await?;

        if !response.is_success() {
            warn!(
                "Listing request for '{}' failed with status {}",
                slug, response.status
            );
            return Err(FetchError::Status(response.status));
        }

        Ok(response.body)
    }
}
