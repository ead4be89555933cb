pub mod client;
pub mod message;

pub use client::TelegramNotifier;
pub use message::{format_notification, PARSE_MODE};
