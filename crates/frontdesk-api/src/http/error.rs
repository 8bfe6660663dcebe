//! Application error type mapping to HTTP status codes.
//!
//! Error bodies are always `{"error": "..."}`. Downstream provider failures
//! are surfaced with a generic message; the underlying cause goes to the
//! operator log only and is never leaked to the HTTP client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use frontdesk_types::error::CompletionError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Caller-caused: missing or empty message.
    Validation(String),
    /// The completion feature is disabled by configuration or missing key.
    FeatureUnavailable,
    /// Downstream completion provider failure.
    Completion(CompletionError),
    /// Generic internal error.
    Internal(String),
}

impl From<CompletionError> for AppError {
    fn from(e: CompletionError) -> Self {
        AppError::Completion(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::FeatureUnavailable => (
                StatusCode::BAD_REQUEST,
                "AI service not configured".to_string(),
            ),
            AppError::Completion(err) => {
                tracing::error!(error = %err, "completion request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to process chat request".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
