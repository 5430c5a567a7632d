use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// JSON body returned for every failed request.
///
/// `kind` is a stable SCREAMING_SNAKE_CASE code; `message` is human-readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub kind: String,
    pub message: String,
}

/// Build the uniform error response used by each service's error enum.
pub fn error_response(status: StatusCode, kind: &str, message: String) -> Response {
    // 4xx are expected client errors and TraceLayer already records the
    // status; only 5xx are logged here.
    if status.is_server_error() {
        tracing::error!(status = status.as_u16(), kind, message = %message, "request failed");
    }
    let body = ErrorBody {
        kind: kind.to_owned(),
        message,
    };
    (status, Json(body)).into_response()
}
