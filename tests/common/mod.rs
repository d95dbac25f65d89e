//! Shared test harness: a fresh in-memory SQLite database per test.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use kitten_api::{create_router, AppState, Config, Database};

/// Connect to a private in-memory database with migrations applied.
///
/// A single pooled connection keeps every query on the same in-memory
/// database for the lifetime of the test.
pub async fn test_database() -> Arc<Database> {
    let mut config = Config::default().with_database_url("sqlite::memory:");
    config.database_max_connections = 1;

    Arc::new(
        Database::connect(&config)
            .await
            .expect("in-memory database should start"),
    )
}

/// Build the full application router over a fresh database.
pub async fn test_app() -> Router {
    let db = test_database().await;
    create_router(AppState::from_database(db))
}

/// Send a request through the router and decode the JSON response body.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    send_request(app, request).await
}

/// Send a prebuilt request and decode the JSON response body (Null if empty or not JSON).
pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
