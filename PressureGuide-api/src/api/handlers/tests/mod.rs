mod guidelines_test;
mod readings_test;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use pressure_guide_domain::testing::ReadingFixture;

use crate::api::routes::create_app;
use crate::api::state::AppState;
use crate::config::AppConfig;

/// Router over an empty in-memory repository
pub(crate) fn empty_app() -> Router {
    create_app(AppState::new(AppConfig::default()))
}

/// Router over a mock repository seeded from the fixture
pub(crate) fn app_with(fixture: &ReadingFixture) -> Router {
    create_app(AppState::with_repository(fixture.repository(), AppConfig::default()))
}

/// Send a request and decode the JSON body
pub(crate) async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub(crate) async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()).await
}

pub(crate) async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}
