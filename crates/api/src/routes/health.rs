//! Health endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::context::AppContext;

pub fn router() -> Router<Arc<AppContext>> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: &'static str,
}

/// GET /health - Liveness and database connectivity
async fn health(State(ctx): State<Arc<AppContext>>) -> Json<HealthResponse> {
    let database = match ctx.db.health_check() {
        Ok(()) => "ok",
        Err(_) => "error",
    };
    let status = if database == "ok" { "ok" } else { "degraded" };
    Json(HealthResponse { status, database })
}
