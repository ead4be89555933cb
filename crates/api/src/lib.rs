pub mod middleware;
pub mod models;
pub mod openapi;
pub mod routes;

use crate::{
    middleware::{
        cors_layer, no_store_middleware, request_logging_middleware, security_headers_middleware,
    },
    openapi::openapi_json,
    routes::{health_check, ping, site, submit_contact},
};
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use config::{CorsConfig, RelayConfig};
use services::{
    contact::{ContactServiceImpl, ContactServiceTrait, Notifier, NotifyError},
    telegram::TelegramNotifier,
};
use std::sync::Arc;

/// Shared handler state, built once at startup
#[derive(Clone)]
pub struct AppState {
    pub contact_service: Arc<dyn ContactServiceTrait>,
    pub telegram_config: Arc<config::TelegramConfig>,
}

/// Wire the contact service to a notifier
pub fn init_app_state_with_notifier(
    config: &RelayConfig,
    notifier: Arc<dyn Notifier>,
) -> AppState {
    let telegram_config = Arc::new(config.telegram.clone());
    let contact_service = Arc::new(ContactServiceImpl::new(notifier, telegram_config.clone()))
        as Arc<dyn ContactServiceTrait>;

    AppState {
        contact_service,
        telegram_config,
    }
}

/// Wire the contact service to the Telegram Bot API
pub fn init_app_state(config: &RelayConfig) -> Result<AppState, NotifyError> {
    let notifier = Arc::new(TelegramNotifier::new(&config.telegram)?) as Arc<dyn Notifier>;
    Ok(init_app_state_with_notifier(config, notifier))
}

/// Build the `/api` routes
///
/// `no_store_middleware` wraps the CORS layer so preflight answers are
/// marked uncacheable too.
pub fn build_api_routes(app_state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/contact", post(submit_contact))
        .route("/ping", get(ping))
        .route("/health", get(health_check))
        .route("/openapi.json", get(openapi_json))
        .fallback(site::api_not_found)
        .method_not_allowed_fallback(site::api_method_not_allowed)
        .with_state(app_state)
        .layer(cors_layer(cors))
        .layer(from_fn(no_store_middleware))
}

/// Build the complete application router
pub fn build_app(app_state: AppState, config: &RelayConfig) -> Router {
    let mut app = Router::new().nest("/api", build_api_routes(app_state, &config.cors));

    if let Some(dir) = &config.static_files.dir {
        tracing::info!(dir = %dir.display(), "Serving static site");
        app = app.fallback_service(site::static_site(dir));
    }

    app.layer(from_fn(security_headers_middleware))
        .layer(from_fn(request_logging_middleware))
}
