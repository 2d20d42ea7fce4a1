//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use roleplay_core::services::{GenerativeTextService, RealtimeCredentialService};
use roleplay_scenario::domain::templates::FallbackTemplates;
use roleplay_session::store::SessionStore;
use roleplay_test_support::{FixedClock, RecordingCredentialService};
use tower::ServiceExt;

use roleplay_api::state::AppState;

/// Realtime model configured for every test app.
pub const TEST_REALTIME_MODEL: &str = "gpt-4o-realtime-preview-2024-12-17";

/// Build the full app router around the given services, with a fresh store
/// and a fixed clock. Uses the same route structure as `main.rs`.
///
/// The returned router owns the store; clone it to issue several requests
/// against the same sessions.
pub fn build_test_app(
    text_service: Arc<dyn GenerativeTextService>,
    credential_service: Arc<dyn RealtimeCredentialService>,
) -> Router {
    let app_state = AppState::new(
        Arc::new(SessionStore::new()),
        text_service,
        credential_service,
        Arc::new(FallbackTemplates::default()),
        Arc::new(FixedClock::default()),
        TEST_REALTIME_MODEL,
    );
    roleplay_api::router(app_state)
}

/// Build the app with a recording credential service.
pub fn build_test_app_with_text(text_service: Arc<dyn GenerativeTextService>) -> Router {
    build_test_app(text_service, Arc::new(RecordingCredentialService::new()))
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value =
        serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value =
        serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}
