use serde::{de, Deserialize, Deserializer, Serialize};
use services::contact::ContactForm;
use utoipa::ToSchema;

// ============================================
// Contact
// ============================================

/// Contact form payload
///
/// Every field is optional. Numbers and booleans are accepted and used in
/// their textual form; `null` is treated as missing.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ContactRequest {
    /// Visitor's display name (2-50 characters)
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// Phone number in any common notation
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,
    /// Email address or Telegram handle
    #[serde(default, deserialize_with = "lenient_string")]
    pub contact: String,
    /// Free-form message, cut to 1000 characters
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: String,
}

impl From<ContactRequest> for ContactForm {
    fn from(request: ContactRequest) -> Self {
        ContactForm {
            name: request.name,
            phone: request.phone,
            contact: request.contact,
            message: request.message,
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            Err(de::Error::custom("expected a string or scalar value"))
        }
    }
}

/// Acknowledgement for a successful call
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn new() -> Self {
        Self { ok: true }
    }
}

impl Default for OkResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Error body; `ok` is always `false`
///
/// Validation failures carry `errors`, every other failure carries `error`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(message.into()),
            errors: None,
        }
    }

    pub fn validation(errors: Vec<String>) -> Self {
        Self {
            ok: false,
            error: None,
            errors: Some(errors),
        }
    }
}

// ============================================
// Diagnostics
// ============================================

/// Liveness probe response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PingResponse {
    pub ok: bool,
    /// Current time in epoch milliseconds
    pub time: i64,
}

/// Configuration presence report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub env: HealthEnv,
}

/// Presence of the messaging credentials; values are never included
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthEnv {
    /// `BOT_TOKEN` is set
    pub bot: bool,
    /// `TELEGRAM_CHAT_ID` is set
    pub chat: bool,
    pub bot_len: usize,
    pub chat_len: usize,
    /// Names of bot/chat related environment variables
    pub keys: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contact_request_defaults_missing_fields() {
        let request: ContactRequest = serde_json::from_value(json!({"name": "Ali"})).unwrap();

        assert_eq!(request.name, "Ali");
        assert_eq!(request.phone, "");
        assert_eq!(request.contact, "");
        assert_eq!(request.message, "");
    }

    #[test]
    fn test_contact_request_coerces_scalars() {
        let request: ContactRequest = serde_json::from_value(json!({
            "name": "Ali",
            "phone": 998901234567u64,
            "contact": null,
            "message": true
        }))
        .unwrap();

        assert_eq!(request.phone, "998901234567");
        assert_eq!(request.contact, "");
        assert_eq!(request.message, "true");
    }

    #[test]
    fn test_contact_request_rejects_nested_values() {
        let result: Result<ContactRequest, _> =
            serde_json::from_value(json!({"name": {"first": "Ali"}}));
        assert!(result.is_err());

        let result: Result<ContactRequest, _> = serde_json::from_value(json!({"phone": [1, 2]}));
        assert!(result.is_err());
    }

    #[test]
    fn test_error_response_shapes() {
        assert_eq!(
            serde_json::to_value(ErrorResponse::new("JSON format xato")).unwrap(),
            json!({"ok": false, "error": "JSON format xato"})
        );
        assert_eq!(
            serde_json::to_value(ErrorResponse::validation(vec!["Kontakt kerak".to_string()]))
                .unwrap(),
            json!({"ok": false, "errors": ["Kontakt kerak"]})
        );
    }
}
