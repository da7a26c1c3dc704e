//! Health check endpoints.

use crate::state::AppState;
use crate::utils::clock::epoch_seconds;
use axum::{response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

/// Name reported in the health body, kept stable for dashboards that
/// filter on it.
const SERVICE_NAME: &str = "flask-app";

/// Registers health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Simple health check endpoint.
///
/// Returns a 200 OK status to indicate the service is running.
async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "timestamp": epoch_seconds()
    }))
}
