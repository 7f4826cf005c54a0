pub mod api;
pub mod delivery;
pub mod format;
pub mod handler;
pub mod mock_chat;
pub mod telegram;
pub mod types;

pub use api::{BotError, ChatApi};
pub use delivery::{deliver, DeliveryReport, Pacing};
pub use handler::{Command, JobBot};
pub use mock_chat::MockChat;
pub use telegram::TelegramClient;
