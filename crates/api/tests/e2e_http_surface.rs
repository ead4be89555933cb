mod common;

use common::*;
use config::AllowedOrigin;

#[tokio::test]
async fn test_security_headers_present() {
    let (server, _) = setup_test_server(&test_config());

    let response = server.get("/api/ping").await;

    assert_eq!(response.header("x-content-type-options"), "nosniff");
    assert_eq!(response.header("x-frame-options"), "SAMEORIGIN");
    assert_eq!(response.header("referrer-policy"), "no-referrer");
    assert_eq!(response.header("cross-origin-opener-policy"), "same-origin");
}

#[tokio::test]
async fn test_cors_preflight_any_origin() {
    let (server, _) = setup_test_server(&test_config());

    let response = server
        .method(axum::http::Method::OPTIONS, "/api/contact")
        .add_header("Origin", "https://site.uz")
        .add_header("Access-Control-Request-Method", "POST")
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.header("access-control-allow-origin"), "*");
    let methods = response.header("access-control-allow-methods");
    let methods = methods.to_str().unwrap();
    assert!(methods.contains("POST"));
    assert!(methods.contains("OPTIONS"));
    assert!(!methods.contains("GET"));
    assert_eq!(response.header("cache-control"), "no-store");
}

#[tokio::test]
async fn test_wrong_method_returns_json_error() {
    let (server, notifier) = setup_test_server(&test_config());

    let response = server.get("/api/contact").await;

    assert_eq!(response.status_code(), 405);
    assert_eq!(
        response.json::<serde_json::Value>(),
        serde_json::json!({"ok": false, "error": "Method not allowed"})
    );
    assert!(response
        .header("content-type")
        .to_str()
        .unwrap()
        .starts_with("application/json"));
    assert_eq!(response.header("cache-control"), "no-store");
    assert!(notifier.sent().is_empty());

    let response = server.delete("/api/ping").await;
    assert_eq!(response.status_code(), 405);
    assert_eq!(response.header("cache-control"), "no-store");
}

#[tokio::test]
async fn test_cors_origin_list() {
    let mut config = test_config();
    config.cors.allowed_origin = AllowedOrigin::parse("https://site.uz, https://www.site.uz");
    let (server, _) = setup_test_server(&config);

    let allowed = server
        .method(axum::http::Method::OPTIONS, "/api/contact")
        .add_header("Origin", "https://www.site.uz")
        .add_header("Access-Control-Request-Method", "POST")
        .await;
    assert_eq!(
        allowed.header("access-control-allow-origin"),
        "https://www.site.uz"
    );

    let denied = server
        .method(axum::http::Method::OPTIONS, "/api/contact")
        .add_header("Origin", "https://evil.example")
        .add_header("Access-Control-Request-Method", "POST")
        .await;
    assert!(denied
        .maybe_header("access-control-allow-origin")
        .is_none());
}

#[tokio::test]
async fn test_static_site_with_spa_fallback() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Bosh sahifa</h1>").unwrap();
    std::fs::write(dir.path().join("style.css"), "body { margin: 0 }").unwrap();

    let mut config = test_config();
    config.static_files.dir = Some(dir.path().to_path_buf());
    let (server, _) = setup_test_server(&config);

    let css = server.get("/style.css").await;
    assert_eq!(css.status_code(), 200);
    assert_eq!(css.text(), "body { margin: 0 }");

    let spa = server.get("/about/team").await;
    assert_eq!(spa.status_code(), 200);
    assert_eq!(spa.text(), "<h1>Bosh sahifa</h1>");

    // API paths are never shadowed by the site
    let ping = server.get("/api/ping").await;
    assert_eq!(ping.status_code(), 200);
    assert_eq!(ping.header("cache-control"), "no-store");
}

#[tokio::test]
async fn test_without_static_dir_unknown_paths_are_not_found() {
    let (server, _) = setup_test_server(&test_config());

    let response = server.get("/index.html").await;

    assert_eq!(response.status_code(), 404);
}
