use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// A general purpose HTTP error type that can be converted into a response.
///
/// Any handler returning `Result<_, HttpError>` produces a JSON error body
/// with a real status code, so the instrumentation middleware always has
/// something to observe even when a handler fails.
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    /// Creates a new HTTP error with the given status code and message.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        HttpError {
            status,
            message: message.into(),
        }
    }
}

/// Converts our `HttpError` into an HTTP response.
impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.message }).to_string();
        Response::builder()
            .status(self.status)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_renders_json_body_with_status() {
        let response =
            HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response
                .headers()
                .get(http::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }
}
