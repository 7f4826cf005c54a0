use async_trait::async_trait;
use reqwest::{header, Client, ClientBuilder};
use std::collections::HashMap;
use std::time::Duration;

use super::Scraper;
use crate::core::FetchError;
use crate::http::{HttpRequest, HttpResponse};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/95.0.4638.69 Safari/537.36";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct HttpScraper {
    client: Client,
}

impl Default for HttpScraper {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT).expect("Failed to create default HttpScraper")
    }
}

impl HttpScraper {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = ClientBuilder::new()
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    fn extract_headers(response: &reqwest::Response) -> HashMap<String, String> {
        response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|val| (k.to_string(), val.to_string())))
            .collect()
    }
}

#[async_trait]
impl Scraper for HttpScraper {
    async fn fetch_single(&self, request: HttpRequest) -> Result<HttpResponse, FetchError> {
        let mut req = self.client.get(request.url.clone());

        for (key, value) in &request.headers {
            let name = header::HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| FetchError::InvalidHeader(e.to_string()))?;
            let value = header::HeaderValue::from_str(value)
                .map_err(|e| FetchError::InvalidHeader(e.to_string()))?;
            req = req.header(name, value);
        }

        let response = req.send().await?;

        let status = response.status().as_u16();
        let headers = Self::extract_headers(&response);
        let url = response.url().clone();
        let body = response.text().await?;

        Ok(HttpResponse {
            url,
            status,
            headers,
            body,
        })
    }
}
