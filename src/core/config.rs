use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use super::{ScraperError, ScraperResult};

pub const DEFAULT_BASE_URL: &str = "https://jobs.dou.ua/vacancies/?category=";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_OUTPUT_PATH: &str = "work.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: Option<String>,
    pub telegram_api_url: String,
    pub jobs_base_url: String,
    pub output_path: PathBuf,
    pub fetch_timeout: Duration,
    pub delivery_batch_size: usize,
    pub delivery_pause: Duration,
    pub poll_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            telegram_bot_token: None,
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            jobs_base_url: DEFAULT_BASE_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            fetch_timeout: Duration::from_secs(10),
            delivery_batch_size: 20,
            delivery_pause: Duration::from_secs(3),
            poll_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> ScraperResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|name| env::var(name).ok())
    }

    pub fn from_vars<F>(lookup: F) -> ScraperResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let batch_size: usize = parse_or(&lookup, "DELIVERY_BATCH_SIZE", defaults.delivery_batch_size)?;
        if batch_size == 0 {
            return Err(ScraperError::Config(
                "DELIVERY_BATCH_SIZE must be greater than zero".to_string(),
            ));
        }

        let fetch_timeout: u64 = parse_or(
            &lookup,
            "FETCH_TIMEOUT_SECS",
            defaults.fetch_timeout.as_secs(),
        )?;
        if fetch_timeout == 0 {
            return Err(ScraperError::Config(
                "FETCH_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            telegram_bot_token: lookup("TELEGRAM_BOT_TOKEN"),
            telegram_api_url: lookup("TELEGRAM_API_URL").unwrap_or(defaults.telegram_api_url),
            jobs_base_url: lookup("JOBS_BASE_URL").unwrap_or(defaults.jobs_base_url),
            output_path: lookup("JOBS_OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),
            fetch_timeout: Duration::from_secs(fetch_timeout),
            delivery_batch_size: batch_size,
            delivery_pause: Duration::from_secs(parse_or(
                &lookup,
                "DELIVERY_PAUSE_SECS",
                defaults.delivery_pause.as_secs(),
            )?),
            poll_timeout: Duration::from_secs(parse_or(
                &lookup,
                "POLL_TIMEOUT_SECS",
                defaults.poll_timeout.as_secs(),
            )?),
        })
    }

    pub fn require_bot_token(&self) -> ScraperResult<&str> {
        self.telegram_bot_token
            .as_deref()
            .ok_or_else(|| ScraperError::Config("Missing environment variable: TELEGRAM_BOT_TOKEN".to_string()))
    }
}

fn parse_or<T, F>(lookup: &F, name: &str, default: T) -> ScraperResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| ScraperError::Config(format!("Invalid value for {}: {}", name, e))),
        None => Ok(default),
    }
}
