use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use super::message::{format_notification, PARSE_MODE};
use crate::contact::{ContactSubmission, Notifier, NotifyError};

/// Body of the Bot API `sendMessage` call
#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

/// HTTP client for the Telegram Bot API
pub struct TelegramNotifier {
    client: reqwest::Client,
    base_url: String,
    bot_token: Option<String>,
    chat_id: Option<String>,
}

impl TelegramNotifier {
    /// Create a notifier from the process configuration.
    ///
    /// Missing credentials are not an error here; `notify` reports them.
    pub fn new(config: &config::TelegramConfig) -> Result<Self, NotifyError> {
        let mut builder = reqwest::Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build().map_err(|e| {
            NotifyError::BackendUnreachable(format!("Failed to build HTTP client: {e}"))
        })?;

        tracing::info!(
            base_url = %config.api_base_url,
            bot_token_set = config.bot_token.is_some(),
            chat_id_set = config.chat_id.is_some(),
            "Telegram client initialized"
        );

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            bot_token: config.bot_token.clone(),
            chat_id: config.chat_id.clone(),
        })
    }

    fn send_message_url(&self, token: &str) -> String {
        format!("{}/bot{}/sendMessage", self.base_url, token)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
        let (Some(token), Some(chat_id)) = (self.bot_token.as_deref(), self.chat_id.as_deref())
        else {
            return Err(NotifyError::NotConfigured);
        };

        let text = format_notification(submission);
        let body = SendMessageRequest {
            chat_id,
            text: &text,
            parse_mode: PARSE_MODE,
        };

        let response = self
            .client
            .post(self.send_message_url(token))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                // the URL carries the bot token
                let e = e.without_url();
                tracing::warn!(error = %e, chat_id = %chat_id, "Telegram request failed");
                NotifyError::BackendUnreachable(e.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(chat_id = %chat_id, status = status.as_u16(), "Telegram message sent");
            return Ok(());
        }

        let detail = response.text().await.unwrap_or_default();

        tracing::error!(
            chat_id = %chat_id,
            status = status.as_u16(),
            "Telegram rejected the message"
        );

        Err(NotifyError::rejected(status.as_u16(), &detail))
    }
}
