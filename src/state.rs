//! Shared application state.
//!
//! Contains the state that is shared across all request handlers:
//! the configuration and the process-wide metrics handle.

use crate::config::ConfigV1;
use crate::metrics::Metrics;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// This state is cloned for each request handler. The metrics handle
/// is the single shared accumulator every request records into.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<ConfigV1>,
    /// Process-wide request counters and duration histogram.
    pub metrics: Metrics,
}
