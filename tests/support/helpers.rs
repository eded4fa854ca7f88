// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use quill_core::application::services::{ApplicationServices, Repositories};
use quill_core::config::AllowedOrigins;
use quill_core::infrastructure::repositories::InMemoryBlogStore;
use quill_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

/// Services over the given repositories, stamped with the fixed test clock.
pub fn build_services(repos: Repositories) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(
        repos,
        Arc::new(mocks::fixed_clock()),
    ))
}

/// Services over a fresh in-memory store.
pub fn in_memory_services() -> Arc<ApplicationServices> {
    build_services(Repositories::from_store(Arc::new(InMemoryBlogStore::new())))
}

pub fn make_router_with(repos: Repositories) -> axum::Router {
    let state = HttpState {
        services: build_services(repos),
    };
    build_router(state, &AllowedOrigins::Any)
}

pub fn make_test_router() -> axum::Router {
    make_router_with(Repositories::from_store(Arc::new(InMemoryBlogStore::new())))
}

pub fn json_request(method: Method, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Sends one request through a clone of the router and returns status and
/// body, with an empty body read as `Value::Null`.
pub async fn send(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("expected a JSON body")
    };
    (status, json)
}

/// Creates a post through the router and returns its JSON representation.
pub async fn create_post(app: &axum::Router, title: &str, content: &str, author: &str) -> Value {
    let payload = serde_json::json!({ "title": title, "content": content, "author": author });
    let (status, json) = send(app, json_request(Method::POST, "/posts", &payload)).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {json}");
    json
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    json
}
