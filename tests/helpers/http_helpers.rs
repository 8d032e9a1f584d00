#![allow(dead_code)]
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use deskline::bootstrap::app_state;
use deskline::infrastructure::http::router::{build_router, DEFAULT_MAX_BODY_BYTES};
use serde_json::Value;
use tower::ServiceExt;

use super::TestContext;

pub fn test_router(ctx: &TestContext) -> Router {
    let state = app_state(ctx.store.clone(), ctx.clock.clone());
    build_router(state, DEFAULT_MAX_BODY_BYTES)
}

/// Sends a request through the router and returns the status with the
/// decoded JSON body (`Value::Null` when the body is not JSON)
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}
