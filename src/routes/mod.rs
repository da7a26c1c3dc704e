//! HTTP route definitions and handlers.
//!
//! This module organizes all HTTP endpoints into logical groups:
//! the home summary, health check, API fixtures, and metrics exposition.

mod api_routes;
mod health_routes;
mod home_routes;
mod metrics_routes;

use crate::middleware::track_requests;
use crate::state::AppState;
use axum::{middleware, Router};

/// Creates the application router with all configured routes.
///
/// Combines all route modules into a single router, wraps everything
/// (including the unmatched-path fallback) in the request instrumentation
/// middleware, and attaches the application state.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(home_routes::routes())
        .merge(health_routes::routes())
        .merge(api_routes::routes())
        .merge(metrics_routes::routes())
        .layer(middleware::from_fn_with_state(state.clone(), track_requests))
        .with_state(state)
}
