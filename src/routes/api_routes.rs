//! API status and error-fixture endpoints.

use crate::state::AppState;
use crate::utils::clock::epoch_seconds;
use crate::utils::http_helpers::HttpError;
use axum::http::StatusCode;
use axum::{response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

/// Registers the API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/status", get(api_status))
        .route("/api/error", get(api_error))
}

/// Operational status endpoint.
async fn api_status() -> impl IntoResponse {
    Json(json!({
        "api": "operational",
        "timestamp": epoch_seconds()
    }))
}

/// Deliberate failure endpoint for exercising monitoring.
///
/// Always fails with a 500 so scrapers and alerts have a known error
/// series to test against. Goes through `HttpError` like any real
/// handler fault would.
async fn api_error() -> Result<Json<serde_json::Value>, HttpError> {
    Err(HttpError::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Test error for monitoring",
    ))
}
