use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use super::api::{BotError, ChatApi};
use super::delivery::{deliver, DeliveryReport, Pacing};
use super::format::format_card;
use super::telegram::TelegramClient;
use super::types::{OutgoingMessage, ReplyKeyboardMarkup, Update};
use crate::core::{JobService, Language};

pub const START_PROMPT: &str = "Вибери мову програмування яка тебе цікавить";
pub const WAIT_NOTICE: &str = "Очікуйте...";
pub const FAILURE_NOTICE: &str = "Не вдалося отримати вакансії, спробуйте пізніше.";
pub const EMPTY_NOTICE: &str = "Вакансій не знайдено.";

const POLL_ERROR_BACKOFF: Duration = Duration::from_secs(5);

/// What a single incoming text resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Jobs(Language),
}

impl Command {
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text == "/start" || text.starts_with("/start ") || text.starts_with("/start@") {
            return Some(Command::Start);
        }
        Language::ALL
            .into_iter()
            .find(|lang| lang.label().eq_ignore_ascii_case(text))
            .map(Command::Jobs)
    }
}

pub fn start_keyboard() -> ReplyKeyboardMarkup {
    ReplyKeyboardMarkup::single_column(Language::ALL.iter().map(|lang| lang.label()))
}

/// Chat front end for the job pipeline.
pub struct JobBot {
    api: Arc<dyn ChatApi>,
    service: Arc<JobService>,
    pacing: Pacing,
}

impl JobBot {
    pub fn new(api: Arc<dyn ChatApi>, service: Arc<JobService>, pacing: Pacing) -> Self {
        Self {
            api,
            service,
            pacing,
        }
    }

    pub async fn handle_message(&self, chat_id: i64, text: &str) -> Result<(), BotError> {
        match Command::parse(text) {
            Some(Command::Start) => {
                info!("Handling /start from chat {}", chat_id);
                self.api
                    .send_message(
                        OutgoingMessage::text(chat_id, START_PROMPT).with_keyboard(start_keyboard()),
                    )
                    .await
            }
            Some(Command::Jobs(language)) => {
                self.send_jobs(chat_id, language).await?;
                Ok(())
            }
            None => {
                debug!("Ignoring message from chat {}: {:?}", chat_id, text);
                Ok(())
            }
        }
    }

    /// Runs the pipeline for `language` and streams the results to `chat_id`.
    /// A pipeline failure is reported to the user and is not an error here.
    pub async fn send_jobs(
        &self,
        chat_id: i64,
        language: Language,
    ) -> Result<DeliveryReport, BotError> {
        info!("Chat {} requested {} vacancies", chat_id, language);
        self.api
            .send_message(OutgoingMessage::html(chat_id, WAIT_NOTICE))
            .await?;

        let records = match self.service.get_jobs(language.slug(), None).await {
            Ok(records) => records,
            Err(err) => {
                error!("Job pipeline for {} failed: {}", language, err);
                self.api
                    .send_message(OutgoingMessage::text(chat_id, FAILURE_NOTICE))
                    .await?;
                return Ok(DeliveryReport::default());
            }
        };

        if records.is_empty() {
            self.api
                .send_message(OutgoingMessage::text(chat_id, EMPTY_NOTICE))
                .await?;
            return Ok(DeliveryReport::default());
        }

        let cards: Vec<String> = records.iter().map(format_card).collect();
        let report = deliver(self.api.as_ref(), chat_id, cards, &self.pacing).await?;
        info!(
            "Delivered {} {} vacancies to chat {} ({} pauses)",
            report.sent, language, chat_id, report.pauses
        );
        Ok(report)
    }

    fn dispatch(self: &Arc<Self>, update: Update) {
        let Some(message) = update.message else {
            return;
        };
        let Some(text) = message.text else {
            return;
        };

        let bot = Arc::clone(self);
        let chat_id = message.chat.id;
        tokio::spawn(async move {
            if let Err(err) = bot.handle_message(chat_id, &text).await {
                warn!("Handling message for chat {} failed: {}", chat_id, err);
            }
        });
    }

    /// Long-polls for updates until the future is dropped. Each update is
    /// handled on its own task.
    pub async fn run(self: Arc<Self>, client: &TelegramClient, poll_timeout: Duration) {
        info!("Bot polling started");
        let mut offset: Option<i64> = None;

        loop {
            match client.get_updates(offset, poll_timeout).await {
                Ok(updates) => {
                    for update in updates {
                        offset = Some(update.update_id + 1);
                        self.dispatch(update);
                    }
                }
                Err(err) => {
                    warn!("getUpdates failed: {}", err);
                    sleep(POLL_ERROR_BACKOFF).await;
                }
            }
        }
    }
}
