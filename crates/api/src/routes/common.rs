use crate::models::ErrorResponse;
use axum::{http::StatusCode, response::Json as ResponseJson};
use services::contact::{ContactError, NotifyError};

/// Returned when the request body is not a JSON object
pub const JSON_FORMAT_ERROR: &str = "JSON format xato";

/// Returned when the messaging credentials are missing
pub const CONFIGURATION_MISSING_ERROR: &str = "Env sozlanmagan";

/// Returned for unexpected failures without a usable message
pub const INTERNAL_ERROR: &str = "Internal Server Error";

pub type ApiError = (StatusCode, ResponseJson<ErrorResponse>);

pub fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, ResponseJson(ErrorResponse::new(message)))
}

/// Map contact service errors to HTTP status codes and bodies
pub fn map_contact_error(error: ContactError) -> ApiError {
    match error {
        ContactError::Validation(errors) => (
            StatusCode::BAD_REQUEST,
            ResponseJson(ErrorResponse::validation(errors)),
        ),
        ContactError::ConfigurationMissing | ContactError::Notify(NotifyError::NotConfigured) => {
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                CONFIGURATION_MISSING_ERROR,
            )
        }
        ContactError::Notify(NotifyError::BackendRejected { body, .. }) => {
            error_response(StatusCode::BAD_GATEWAY, body)
        }
        ContactError::Notify(NotifyError::BackendUnreachable(message)) => {
            let message = if message.trim().is_empty() {
                INTERNAL_ERROR.to_string()
            } else {
                message
            };
            error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_validation_error() {
        let (status, ResponseJson(body)) =
            map_contact_error(ContactError::Validation(vec!["Kontakt kerak".to_string()]));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.ok);
        assert_eq!(body.errors, Some(vec!["Kontakt kerak".to_string()]));
        assert_eq!(body.error, None);
    }

    #[test]
    fn test_map_configuration_missing() {
        let (status, ResponseJson(body)) = map_contact_error(ContactError::ConfigurationMissing);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.as_deref(), Some(CONFIGURATION_MISSING_ERROR));
    }

    #[test]
    fn test_map_backend_errors() {
        let (status, ResponseJson(body)) = map_contact_error(ContactError::Notify(
            NotifyError::rejected(403, "Forbidden"),
        ));
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.error.as_deref(), Some("Forbidden"));

        let (status, ResponseJson(body)) = map_contact_error(ContactError::Notify(
            NotifyError::BackendUnreachable("error sending request".to_string()),
        ));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.as_deref(), Some("error sending request"));

        let (_, ResponseJson(body)) = map_contact_error(ContactError::Notify(
            NotifyError::BackendUnreachable(String::new()),
        ));
        assert_eq!(body.error.as_deref(), Some(INTERNAL_ERROR));
    }
}
