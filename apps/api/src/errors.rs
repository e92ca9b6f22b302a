use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::pipeline::AnalysisError;

/// Endpoint-level error type carrying one of the callable reason codes.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// The reason code reported to callers.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthenticated(_) => "unauthenticated",
            AppError::InvalidArgument(_) => "invalid-argument",
            AppError::NotFound(_) => "not-found",
            AppError::PermissionDenied(_) => "permission-denied",
            AppError::Internal(_) => "internal",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PermissionDenied(_) => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Maps a failed analysis attempt, keeping internals out of the message.
    pub fn from_analysis(err: AnalysisError, context: &str) -> Self {
        match err {
            AnalysisError::MissingText => AppError::InvalidArgument(err.to_string()),
            AnalysisError::Classification(_) | AnalysisError::Store(_) => {
                tracing::error!("{context}: {err:?}");
                AppError::Internal(context.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Unauthenticated(msg)
            | AppError::InvalidArgument(msg)
            | AppError::NotFound(msg)
            | AppError::PermissionDenied(msg)
            | AppError::Internal(msg) => msg.clone(),
        };

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": message
            }
        }));

        (self.status(), body).into_response()
    }
}
