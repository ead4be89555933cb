use crate::models::ErrorResponse;
use axum::{http::StatusCode, response::Json as ResponseJson};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

/// Static site with `index.html` as the fallback for unknown paths
pub fn static_site(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}

/// Fallback for unknown `/api` paths
pub async fn api_not_found() -> (StatusCode, ResponseJson<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        ResponseJson(ErrorResponse::new("Not found")),
    )
}

/// Fallback for known `/api` paths called with the wrong method
pub async fn api_method_not_allowed() -> (StatusCode, ResponseJson<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        ResponseJson(ErrorResponse::new("Method not allowed")),
    )
}
