//! Home endpoint.

use crate::state::AppState;
use axum::{response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

/// Registers the home route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(home))
}

/// Service summary endpoint.
///
/// Returns the running banner, crate version, and a map of the
/// interesting endpoints.
async fn home() -> impl IntoResponse {
    Json(json!({
        "message": "Flask app is running!",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "metrics": "/metrics"
        }
    }))
}
