// API Middleware
//
// Response headers, cross-origin rules and request logging.

pub mod cache;
pub mod cors;
pub mod logging;
pub mod security;

// Re-export commonly used items
pub use cache::no_store_middleware;
pub use cors::cors_layer;
pub use logging::request_logging_middleware;
pub use security::security_headers_middleware;
