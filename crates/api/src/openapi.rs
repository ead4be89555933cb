use crate::models::*;
use axum::response::Json as ResponseJson;
use utoipa::OpenApi;

/// OpenAPI documentation configuration
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contact Relay API",
        description = "Accepts contact form submissions from a static website and forwards them to a Telegram chat.",
        version = "1.0.0",
        license(
            name = "MIT",
        )
    ),
    paths(
        crate::routes::contact::submit_contact,
        crate::routes::ping::ping,
        crate::routes::health::health_check,
    ),
    components(
        schemas(
            ContactRequest, OkResponse, ErrorResponse,
            PingResponse, HealthResponse, HealthEnv,
        )
    ),
    tags(
        (name = "Contact", description = "Contact form submission"),
        (name = "Diagnostics", description = "Liveness and configuration checks"),
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document
pub async fn openapi_json() -> ResponseJson<utoipa::openapi::OpenApi> {
    ResponseJson(ApiDoc::openapi())
}
