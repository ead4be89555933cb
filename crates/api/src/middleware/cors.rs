use axum::http::{HeaderValue, Method};
use config::{AllowedOrigin, CorsConfig};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

/// Cross-origin rules for the contact form: `POST` and `OPTIONS` only,
/// from any origin or from the configured list
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request());

    match &config.allowed_origin {
        AllowedOrigin::Any => layer.allow_origin(AllowOrigin::any()),
        AllowedOrigin::List(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(%origin, "Ignoring invalid ALLOWED_ORIGIN entry");
                        None
                    }
                })
                .collect();
            layer.allow_origin(AllowOrigin::list(origins))
        }
    }
}
