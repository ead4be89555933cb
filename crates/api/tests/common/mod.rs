#![allow(dead_code)]

use api::{build_app, init_app_state, init_app_state_with_notifier};
use async_trait::async_trait;
use axum_test::TestServer;
use config::RelayConfig;
use services::contact::{ContactSubmission, Notifier, NotifyError};
use std::sync::{Arc, Mutex};

pub const TEST_BOT_TOKEN: &str = "test-token";
pub const TEST_CHAT_ID: &str = "-100500";

/// Helper function to create a test configuration with both credentials
pub fn test_config() -> RelayConfig {
    let mut config = RelayConfig::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.port = 0;
    config.logging.level = "debug".to_string();
    config.logging.format = "compact".to_string();
    config.telegram.bot_token = Some(TEST_BOT_TOKEN.to_string());
    config.telegram.chat_id = Some(TEST_CHAT_ID.to_string());
    config.telegram.timeout_seconds = Some(5);
    config.telegram.env_keys = vec!["BOT_TOKEN".to_string(), "TELEGRAM_CHAT_ID".to_string()];
    config
}

/// Same as [`test_config`] without any messaging credentials
pub fn unconfigured_test_config() -> RelayConfig {
    let mut config = test_config();
    config.telegram.bot_token = None;
    config.telegram.chat_id = None;
    config.telegram.env_keys = Vec::new();
    config
}

/// Notifier that records submissions instead of calling Telegram
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<ContactSubmission>>,
    pub fail_with: Option<NotifyError>,
}

impl RecordingNotifier {
    pub fn failing(error: NotifyError) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_with: Some(error),
        }
    }

    pub fn sent(&self) -> Vec<ContactSubmission> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(submission.clone());
        match &self.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

/// Test server backed by the given notifier
pub fn setup_test_server_with_notifier(
    config: &RelayConfig,
    notifier: Arc<dyn Notifier>,
) -> TestServer {
    let app_state = init_app_state_with_notifier(config, notifier);
    TestServer::new(build_app(app_state, config)).unwrap()
}

/// Test server using the real Telegram client against `api_base_url`
pub fn setup_test_server_with_telegram(mut config: RelayConfig, api_base_url: String) -> TestServer {
    config.telegram.api_base_url = api_base_url;
    let app_state = init_app_state(&config).unwrap();
    TestServer::new(build_app(app_state, &config)).unwrap()
}

/// Test server with a recording notifier; returns both
pub fn setup_test_server(config: &RelayConfig) -> (TestServer, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let server = setup_test_server_with_notifier(config, notifier.clone());
    (server, notifier)
}
