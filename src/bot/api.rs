use async_trait::async_trait;
use thiserror::Error;

use super::types::OutgoingMessage;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Telegram API error: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Outbound side of the chat transport.
#[async_trait]
pub trait ChatApi: Send + Sync {
    async fn send_message(&self, message: OutgoingMessage) -> Result<(), BotError>;
}
