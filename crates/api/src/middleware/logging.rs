//! Request logging middleware.
//!
//! Logs one line per request with method, path, status and latency.
//! Query strings are left out of the logged path.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;

pub async fn request_logging_middleware(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let status = response.status();
    let latency_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::warn!(%method, %path, status = status.as_u16(), latency_ms, "request failed");
    } else {
        tracing::info!(%method, %path, status = status.as_u16(), latency_ms, "request");
    }

    response
}
