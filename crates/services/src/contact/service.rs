use async_trait::async_trait;
use std::sync::Arc;

use super::{
    errors::ContactError,
    models::ContactForm,
    ports::{ContactServiceTrait, Notifier, NotifyError},
    validation::validate,
};

/// Contact service: normalize, validate, check configuration, notify
pub struct ContactServiceImpl {
    pub notifier: Arc<dyn Notifier>,
    pub telegram_config: Arc<config::TelegramConfig>,
}

impl ContactServiceImpl {
    pub fn new(notifier: Arc<dyn Notifier>, telegram_config: Arc<config::TelegramConfig>) -> Self {
        Self {
            notifier,
            telegram_config,
        }
    }
}

#[async_trait]
impl ContactServiceTrait for ContactServiceImpl {
    async fn submit(&self, form: ContactForm) -> Result<(), ContactError> {
        let submission = form.normalize();

        let errors = validate(&submission);
        if !errors.is_empty() {
            tracing::debug!(errors = ?errors, "Contact submission rejected by validation");
            return Err(ContactError::Validation(errors));
        }

        if self.telegram_config.credentials().is_none() {
            tracing::error!(
                bot_token_set = self.telegram_config.bot_token.is_some(),
                chat_id_set = self.telegram_config.chat_id.is_some(),
                "Messaging backend credentials are missing"
            );
            return Err(ContactError::ConfigurationMissing);
        }

        match self.notifier.notify(&submission).await {
            Ok(()) => {
                tracing::info!("Contact submission delivered");
                Ok(())
            }
            Err(NotifyError::NotConfigured) => Err(ContactError::ConfigurationMissing),
            Err(e) => Err(ContactError::Notify(e)),
        }
    }
}
