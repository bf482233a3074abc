//! Test harness for exercising the router without a network listener.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use meetsync_domain::Config;
use meetsync_server::{router, AppContext};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

/// Build an app backed by a temp-dir database and the mock calendar gateway.
pub fn test_app() -> (Router, Arc<AppContext>, TempDir) {
    let temp_dir = TempDir::new().expect("temp dir created");

    let mut config = Config::default();
    config.storage.db_path =
        temp_dir.path().join("meetings.db").to_string_lossy().into_owned();
    config.calendar.use_mock = true;

    let ctx = Arc::new(AppContext::with_config(config).expect("context built"));
    (router(ctx.clone()), ctx, temp_dir)
}

/// POST a JSON body and decode the JSON response.
pub async fn post_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request built");

    let response = app.clone().oneshot(request).await.expect("request handled");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body read").to_bytes();
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

/// GET a path and decode the JSON response.
pub async fn get_json(app: &Router, path: &str) -> (StatusCode, Value) {
    let request =
        Request::builder().method("GET").uri(path).body(Body::empty()).expect("request built");

    let response = app.clone().oneshot(request).await.expect("request handled");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body read").to_bytes();
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}
