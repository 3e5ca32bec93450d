//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers should return `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;

/// Application-level error type for the review site.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Database(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        // Don't expose internal error details to clients. The 500 payload is
        // a fixed contract; callers branch on it.
        let message = match &self {
            Self::Database(_) | Self::Internal(_) => "Internal server error",
            Self::NotFound(_) => "Not found",
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
