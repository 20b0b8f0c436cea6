//! Router assembly.

pub mod v1;

use axum::{Json, Router, routing::get};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Build the full application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", v1::create_v1_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
