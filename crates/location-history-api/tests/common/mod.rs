//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use location_history_store::InMemoryHistoryRepository;
use tower::ServiceExt;

use location_history_api::routes;
use location_history_api::state::AppState;

/// Build the full app router with a fresh in-memory store. Uses the same
/// route structure as `main.rs`.
///
/// The returned router can be cloned per request; all clones share the same
/// store, so multi-request flows observe each other's writes.
pub fn build_test_app() -> Router {
    let app_state = AppState::new(Arc::new(InMemoryHistoryRepository::new()));

    Router::new()
        .merge(routes::health::router())
        .nest("/location", routes::location::router())
        .with_state(app_state)
}

/// Send a PUT request with a raw body and return status plus raw response
/// bytes.
pub async fn put_raw(app: &Router, uri: &str, body: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .body(Body::from(body.to_owned()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, bytes.to_vec())
}

/// Send a GET request and return status plus parsed JSON body.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    (status, json)
}

/// Send a DELETE request and return status plus raw response bytes.
pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, bytes.to_vec())
}
