//! Request instrumentation middleware.
//!
//! Wraps every request/response pair with timing and counting side
//! effects. This is the only code that runs on every path, matched or
//! not, so the counters see each request exactly once.

use std::time::Instant;

use axum::extract::{MatchedPath, Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::metrics::MetricsRecorder;
use crate::state::AppState;

/// Endpoint label used when no route matched the request path.
pub const UNMATCHED_ENDPOINT: &str = "unknown";

/// Records request duration and a labeled request count around the inner
/// service call.
///
/// The method and matched route are captured before dispatch; the status
/// code is read from whatever response the inner service produced,
/// including error responses. The duration is observed first, then the
/// `(method, endpoint, status)` counter is incremented.
pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let endpoint = req
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_ENDPOINT.to_owned());
    let start = Instant::now();

    let response = next.run(req).await;

    state
        .metrics
        .record_request_duration(start.elapsed().as_secs_f64());
    state
        .metrics
        .record_request(&method, &endpoint, response.status().as_u16());

    response
}
