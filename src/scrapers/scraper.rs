use crate::core::FetchError;
use crate::http::{HttpRequest, HttpResponse};
use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};

/// Transport capability: one request in, one response out.
///
/// Implementations report every HTTP status as a response; deciding what
/// counts as a failure is left to the caller.
#[async_trait]
pub trait Scraper: Send + Sync {
    async fn fetch_single(&self, request: HttpRequest) -> Result<HttpResponse, FetchError>;

    async fn fetch(&self, request: HttpRequest) -> Result<HttpResponse, FetchError> {
        let start_time = Utc::now();
        info!("Fetching URL: {}", request.url);

        let response = self.fetch_single(request).await?;

        let duration = Utc::now().signed_duration_since(start_time);
        debug!(
            "Received response: status={}, body_length={}, elapsed={}ms",
            response.status,
            response.body.len(),
            duration.num_milliseconds()
        );

        Ok(response)
    }
}
