use async_trait::async_trait;
use log::{debug, trace};
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Duration;

use super::api::{BotError, ChatApi};
use super::types::{ApiResponse, OutgoingMessage, Update};

/// Minimal Bot API client: long polling plus `sendMessage`.
#[derive(Clone)]
pub struct TelegramClient {
    client: Client,
    base_url: String,
}

impl TelegramClient {
    /// `poll_timeout` is the long-polling window; the HTTP timeout is set a
    /// little above it so an idle poll is never cut off.
    pub fn new(api_url: &str, token: &str, poll_timeout: Duration) -> Result<Self, BotError> {
        let client = ClientBuilder::new()
            .timeout(poll_timeout + Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: format!("{}/bot{}", api_url.trim_end_matches('/'), token),
        })
    }

    async fn call<P, R>(&self, method: &str, payload: &P) -> Result<R, BotError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, method);
        trace!("Calling Telegram method {}", method);

        let response = self.client.post(&url).json(payload).send().await?;
        let status = response.status();
        let body: ApiResponse<R> = response.json().await?;

        if !body.ok {
            return Err(BotError::Api(format!(
                "{} returned {}: {}",
                method,
                status,
                body.description.unwrap_or_default()
            )));
        }

        body.result
            .ok_or_else(|| BotError::Api(format!("{} returned no result", method)))
    }

    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout: Duration,
    ) -> Result<Vec<Update>, BotError> {
        let mut payload = json!({
            "timeout": timeout.as_secs(),
            "allowed_updates": ["message"],
        });
        if let Some(offset) = offset {
            payload["offset"] = json!(offset);
        }

        let updates: Vec<Update> = self.call("getUpdates", &payload).await?;
        if !updates.is_empty() {
            debug!("Received {} updates", updates.len());
        }
        Ok(updates)
    }
}

#[async_trait]
impl ChatApi for TelegramClient {
    async fn send_message(&self, message: OutgoingMessage) -> Result<(), BotError> {
        debug!("Sending message to chat_id: {}", message.chat_id);
        let _: Value = self.call("sendMessage", &message).await?;
        Ok(())
    }
}
