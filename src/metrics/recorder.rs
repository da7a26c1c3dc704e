//! Metrics recording implementation using Prometheus.

use prometheus::{
    register_counter_vec_with_registry, register_histogram_with_registry, CounterVec, Encoder,
    Histogram, Opts, Registry, TextEncoder,
};
use std::sync::Arc;

/// Trait for recording application metrics.
pub trait MetricsRecorder: Clone + Send + Sync + 'static {
    /// Records a completed HTTP request with its method, endpoint and status.
    fn record_request(&self, method: &str, endpoint: &str, status: u16);

    /// Records the duration of a completed HTTP request.
    fn record_request_duration(&self, duration_secs: f64);
}

/// Prometheus metrics collector.
///
/// Owns the registry plus the two process-wide accumulators every
/// request records into. Cloning is cheap; all clones share state.
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,

    requests_total: CounterVec,
    request_duration_seconds: Histogram,
}

impl Metrics {
    /// Creates a new metrics instance with a Prometheus registry.
    pub fn new() -> Self {
        let registry = Arc::new(Registry::new());

        let requests_total = register_counter_vec_with_registry!(
            Opts::new("flask_requests_total", "Total Flask requests"),
            &["method", "endpoint", "status"],
            registry.clone()
        )
        .expect("Failed to register flask_requests_total");

        let request_duration_seconds = register_histogram_with_registry!(
            "flask_request_duration_seconds",
            "Flask request duration in seconds",
            registry.clone()
        )
        .expect("Failed to register flask_request_duration_seconds");

        Metrics {
            registry,
            requests_total,
            request_duration_seconds,
        }
    }

    /// Renders all metrics in Prometheus text format.
    pub fn render(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .expect("Failed to encode metrics");
        String::from_utf8(buffer).expect("Metrics encoding produced invalid UTF-8")
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Metrics::new()
    }
}

impl MetricsRecorder for Metrics {
    fn record_request(&self, method: &str, endpoint: &str, status: u16) {
        self.requests_total
            .with_label_values(&[method, endpoint, &status.to_string()])
            .inc();
    }

    fn record_request_duration(&self, duration_secs: f64) {
        self.request_duration_seconds.observe(duration_secs);
    }
}
