use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

use super::api::{BotError, ChatApi};
use super::types::OutgoingMessage;

/// In-memory `ChatApi` that records what would have been sent.
#[derive(Clone, Default)]
pub struct MockChat {
    sent: Arc<Mutex<Vec<OutgoingMessage>>>,
    fail_after: Option<usize>,
}

impl MockChat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `count` messages, then rejects every later one.
    pub fn failing_after(count: usize) -> Self {
        Self {
            fail_after: Some(count),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<OutgoingMessage> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl ChatApi for MockChat {
    async fn send_message(&self, message: OutgoingMessage) -> Result<(), BotError> {
        let mut sent = self.sent.lock();
        if self.fail_after.is_some_and(|limit| sent.len() >= limit) {
            return Err(BotError::Api("Too Many Requests".to_string()));
        }
        sent.push(message);
        Ok(())
    }
}
