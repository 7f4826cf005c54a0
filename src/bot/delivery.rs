use log::debug;
use std::time::Duration;
use tokio::time::sleep;

use super::api::{BotError, ChatApi};
use super::types::OutgoingMessage;

/// Delivery cadence: after every `batch_size` messages, wait `pause`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    batch_size: usize,
    pause: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            batch_size: 20,
            pause: Duration::from_secs(3),
        }
    }
}

impl Pacing {
    pub fn new(batch_size: usize, pause: Duration) -> Self {
        Self {
            batch_size: batch_size.max(1),
            pause,
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn pause(&self) -> Duration {
        self.pause
    }

    /// Whether to wait before sending the message at `index` (0-based).
    /// There is never a pause before the first message or after the last.
    pub fn pause_before(&self, index: usize) -> bool {
        index > 0 && index % self.batch_size == 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    pub sent: usize,
    pub pauses: usize,
}

/// Sends `cards` as HTML messages in order, pacing them per `pacing`.
/// Stops at the first send failure.
pub async fn deliver<I>(
    api: &dyn ChatApi,
    chat_id: i64,
    cards: I,
    pacing: &Pacing,
) -> Result<DeliveryReport, BotError>
where
    I: IntoIterator<Item = String>,
    I::IntoIter: Send,
{
    let mut report = DeliveryReport::default();

    for (index, card) in cards.into_iter().enumerate() {
        if pacing.pause_before(index) {
            debug!(
                "Sent {} messages to {}, pausing for {:?}",
                index, chat_id, pacing.pause
            );
            sleep(pacing.pause).await;
            report.pauses += 1;
        }
        api.send_message(OutgoingMessage::html(chat_id, card)).await?;
        report.sent += 1;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::MockChat;
    use tokio::time::Instant;

    fn cards(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("card {}", i)).collect()
    }

    #[test]
    fn test_pause_points() {
        let pacing = Pacing::default();
        let points: Vec<usize> = (0..45).filter(|i| pacing.pause_before(*i)).collect();
        assert_eq!(points, vec![20, 40]);
    }

    #[test]
    fn test_zero_batch_size_is_clamped() {
        let pacing = Pacing::new(0, Duration::from_secs(1));
        assert_eq!(pacing.batch_size(), 1);
        assert!(!pacing.pause_before(0));
        assert!(pacing.pause_before(1));
        assert!(pacing.pause_before(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_45_messages_pause_twice() {
        let chat = MockChat::new();
        let start = Instant::now();

        let report = deliver(&chat, 9, cards(45), &Pacing::default()).await.unwrap();

        assert_eq!(report, DeliveryReport { sent: 45, pauses: 2 });
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(6) && elapsed < Duration::from_secs(7));
        let sent = chat.sent();
        assert_eq!(sent.len(), 45);
        assert_eq!(sent[0].text, "card 1");
        assert_eq!(sent[44].text, "card 45");
        assert!(sent.iter().all(|m| m.chat_id == 9));
    }

    #[tokio::test(start_paused = true)]
    async fn test_exact_batch_has_no_trailing_pause() {
        let chat = MockChat::new();
        let report = deliver(&chat, 1, cards(20), &Pacing::default()).await.unwrap();
        assert_eq!(report.pauses, 0);

        let report = deliver(&chat, 1, cards(40), &Pacing::default()).await.unwrap();
        assert_eq!(report.pauses, 1);
    }

    #[tokio::test]
    async fn test_nothing_to_send() {
        let chat = MockChat::new();
        let report = deliver(&chat, 1, Vec::new(), &Pacing::default()).await.unwrap();
        assert_eq!(report, DeliveryReport::default());
        assert!(chat.sent().is_empty());
    }

    #[tokio::test]
    async fn test_stops_on_send_failure() {
        let chat = MockChat::failing_after(3);
        let err = deliver(&chat, 1, cards(10), &Pacing::new(5, Duration::ZERO)).await;
        assert!(err.is_err());
        assert_eq!(chat.sent().len(), 3);
    }
}
