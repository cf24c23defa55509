use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::error;

/// JSON error body: `{"error": <title>, "detail": <message>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: String,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &str, detail: Option<String>) -> Self {
        Self { status, error: error.to_string(), detail }
    }

    /// Map a service failure: request problems are 400, missing rows 404,
    /// everything else 500 under `failure_title`.
    pub fn from_service(e: ServiceError, failure_title: &str) -> Self {
        if e.is_client_error() {
            return Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string()));
        }
        match e {
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string())),
            other => {
                error!(err = %other, "{}", failure_title);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, failure_title, Some(other.to_string()))
            }
        }
    }
}

/// Unreadable request bodies are validation failures, reported in the same
/// JSON shape as every other error.
impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(rejection.body_text()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"error": self.error, "detail": self.detail}))).into_response()
    }
}
