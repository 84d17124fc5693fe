use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use service::errors::ServiceError;

/// Request-boundary error. Every variant renders as a JSON
/// `{"error": <message>}` body; storage causes are logged server-side and
/// not leaked to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("internal storage error")]
    Storage(#[from] ServiceError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage(cause) => {
                error!(error = %cause, "storage failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let msg = self.to_string();
        (status, Json(serde_json::json!({"error": msg}))).into_response()
    }
}
