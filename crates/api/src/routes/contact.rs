use crate::{
    models::{ContactRequest, ErrorResponse, OkResponse},
    routes::common::{error_response, map_contact_error, ApiError, JSON_FORMAT_ERROR},
    AppState,
};
use axum::{extract::State, http::StatusCode, response::Json as ResponseJson};
use bytes::Bytes;
use tracing::debug;

/// Submit a contact form
///
/// Normalizes and validates the fields, then forwards a notification to the
/// configured Telegram chat. The body is parsed as JSON regardless of the
/// request's content type.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "Contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Notification delivered", body = OkResponse),
        (status = 400, description = "Malformed JSON or invalid fields", body = ErrorResponse),
        (status = 500, description = "Server not configured or backend unreachable", body = ErrorResponse),
        (status = 502, description = "Messaging backend rejected the notification", body = ErrorResponse)
    )
)]
pub async fn submit_contact(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<ResponseJson<OkResponse>, ApiError> {
    let request = parse_contact_request(&body).map_err(|e| {
        debug!(error = %e, "Rejecting contact request with malformed JSON");
        error_response(StatusCode::BAD_REQUEST, JSON_FORMAT_ERROR)
    })?;

    app_state
        .contact_service
        .submit(request.into())
        .await
        .map_err(map_contact_error)?;

    Ok(ResponseJson(OkResponse::new()))
}

/// Parse the body as a JSON object.
///
/// Derived struct deserializers also accept sequences, so anything other
/// than an object is rejected before field extraction.
fn parse_contact_request(body: &[u8]) -> Result<ContactRequest, serde_json::Error> {
    match serde_json::from_slice::<serde_json::Value>(body)? {
        value @ serde_json::Value::Object(_) => serde_json::from_value(value),
        other => Err(serde::de::Error::custom(format!(
            "expected a JSON object, found {}",
            match other {
                serde_json::Value::Array(_) => "an array",
                serde_json::Value::String(_) => "a string",
                serde_json::Value::Null => "null",
                _ => "a scalar",
            }
        ))),
    }
}
