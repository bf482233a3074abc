//! Callable endpoint routing

pub mod calendar;
pub mod health;
pub mod meetings;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::context::AppContext;

/// Build the full application router with CORS applied.
pub fn router(ctx: Arc<AppContext>) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .merge(meetings::router())
        .merge(calendar::router())
        .merge(health::router())
        .with_state(ctx)
        .layer(cors)
}
