use crate::{
    models::{HealthEnv, HealthResponse},
    AppState,
};
use axum::{extract::State, http::StatusCode, response::Json as ResponseJson};

/// Configuration health check
///
/// Reports whether the messaging credentials reached the process, with their
/// lengths and the names of related environment variables. Never returns the
/// values themselves.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Diagnostics",
    responses(
        (status = 200, description = "Configuration presence report", body = HealthResponse),
    )
)]
pub async fn health_check(
    State(app_state): State<AppState>,
) -> (StatusCode, ResponseJson<HealthResponse>) {
    let telegram = &app_state.telegram_config;
    let length = |value: &Option<String>| value.as_deref().map_or(0, |v| v.chars().count());

    (
        StatusCode::OK,
        ResponseJson(HealthResponse {
            status: "ok".to_string(),
            env: HealthEnv {
                bot: telegram.bot_token.is_some(),
                chat: telegram.chat_id.is_some(),
                bot_len: length(&telegram.bot_token),
                chat_len: length(&telegram.chat_id),
                keys: telegram.env_keys.clone(),
            },
        }),
    )
}
