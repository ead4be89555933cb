use async_trait::async_trait;

#[cfg(any(test, feature = "test-mocks"))]
use mockall::automock;

use super::{errors::ContactError, models::ContactForm, models::ContactSubmission};

/// Backend error details are cut to this many characters
pub const MAX_ERROR_DETAIL_LENGTH: usize = 200;

/// Error type for delivering a notification to the messaging backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotifyError {
    /// The backend answered with a non-success status
    #[error("{body}")]
    BackendRejected { status: u16, body: String },
    /// The backend could not be reached or failed mid-request
    #[error("{0}")]
    BackendUnreachable(String),
    #[error("Messaging backend not configured")]
    NotConfigured,
}

impl NotifyError {
    pub fn rejected(status: u16, body: &str) -> Self {
        NotifyError::BackendRejected {
            status,
            body: body.chars().take(MAX_ERROR_DETAIL_LENGTH).collect(),
        }
    }
}

/// Delivers a submission to the messaging backend.
///
/// Exactly one outbound attempt per call; there is no retry.
#[cfg_attr(any(test, feature = "test-mocks"), automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, submission: &ContactSubmission) -> Result<(), NotifyError>;
}

#[cfg_attr(any(test, feature = "test-mocks"), automock)]
#[async_trait]
pub trait ContactServiceTrait: Send + Sync {
    /// Normalize, validate and deliver a contact form
    async fn submit(&self, form: ContactForm) -> Result<(), ContactError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_truncates_body() {
        let body = "e".repeat(500);
        match NotifyError::rejected(403, &body) {
            NotifyError::BackendRejected { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body.chars().count(), MAX_ERROR_DETAIL_LENGTH);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rejected_keeps_short_body() {
        let err = NotifyError::rejected(400, "Bad Request: chat not found");
        assert_eq!(err.to_string(), "Bad Request: chat not found");
    }
}
