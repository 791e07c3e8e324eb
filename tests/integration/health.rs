//! Health endpoint integration tests
//!
//! Tests for GET /health (and any other method on the same path).

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use crate::common::server_with_success;

#[tokio::test]
async fn test_health_returns_healthy() {
    let (server, _) = server_with_success();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_health_content_type_is_json() {
    let (server, _) = server_with_success();

    let response = server.get("/health").await;

    let content_type = response
        .headers()
        .get("content-type")
        .expect("content-type header")
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("application/json"));
}

#[tokio::test]
async fn test_health_ignores_method() {
    let (server, provider) = server_with_success();

    for method in [Method::POST, Method::PUT, Method::DELETE] {
        let response = server.method(method, "/health").await;
        response.assert_status(StatusCode::OK);
        assert_eq!(response.json::<Value>()["status"], "healthy");
    }

    // Liveness never touches the upstream
    assert_eq!(provider.calls(), 0);
}
