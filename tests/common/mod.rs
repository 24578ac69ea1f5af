use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use hrms_api_rust::authz::RoleMap;
use hrms_api_rust::{app, AppState};

/// Build the full router with the shipped role map and a test signing
/// secret. Each request is driven through the router in-process.
pub fn test_app() -> Router {
    let role_map = Arc::new(RoleMap::builtin().expect("builtin roles are valid"));
    app(AppState::new(role_map, "integration-test-secret"))
}

pub async fn send(
    app: &Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request builds"),
        None => builder.body(Body::empty()).expect("request builds"),
    };
    send_raw(app, request).await
}

pub async fn send_raw(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body is JSON")
    };
    (status, value)
}

/// Log in through the public endpoint and return the issued bearer token.
pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/auth/login",
        None,
        Some(serde_json::json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["data"]["token"]
        .as_str()
        .expect("login returns a token")
        .to_string()
}
