use crate::models::PingResponse;
use axum::response::Json as ResponseJson;
use chrono::Utc;

/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/ping",
    tag = "Diagnostics",
    responses(
        (status = 200, description = "Process is alive", body = PingResponse),
    )
)]
pub async fn ping() -> ResponseJson<PingResponse> {
    ResponseJson(PingResponse {
        ok: true,
        time: Utc::now().timestamp_millis(),
    })
}
