use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use figment::{
    providers::{Format, Yaml},
    Figment,
};
use flaskmon::config::{Config, ConfigV1};
use flaskmon::metrics::Metrics;
use flaskmon::routes::create_router;
use flaskmon::state::AppState;
use serde_json::Value;

const TEST_CONFIG: &str = r#"
version: "1.0.0"
bind_address: 127.0.0.1:5001
logging:
  level: "debug"
  format: "console"
"#;

pub fn load_test_config() -> ConfigV1 {
    let config: Config = Figment::new()
        .merge(Yaml::string(TEST_CONFIG))
        .extract()
        .expect("Failed to parse test config YAML");

    match config {
        Config::ConfigV1(cfg) => cfg,
    }
}

/// Builds the full application router with a fresh metrics registry.
///
/// Each call gets its own registry so tests can assert exact counts.
pub fn build_app() -> Router {
    let config = Arc::new(load_test_config());
    let metrics = Metrics::new();

    create_router(AppState { config, metrics })
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("response body should be UTF-8")
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

/// Finds the `flask_requests_total` sample matching every given label pair
/// and returns its value, regardless of label ordering in the exposition.
pub fn counter_value(exposition: &str, labels: &[(&str, &str)]) -> Option<f64> {
    exposition
        .lines()
        .filter(|line| line.starts_with("flask_requests_total{"))
        .find(|line| {
            labels
                .iter()
                .all(|(key, value)| line.contains(&format!("{}=\"{}\"", key, value)))
        })
        .and_then(|line| line.rsplit(' ').next())
        .and_then(|value| value.parse().ok())
}

/// Total observation count of the request duration histogram.
pub fn histogram_count(exposition: &str) -> Option<u64> {
    exposition
        .lines()
        .find(|line| line.starts_with("flask_request_duration_seconds_count"))
        .and_then(|line| line.rsplit(' ').next())
        .and_then(|value| value.parse().ok())
}
