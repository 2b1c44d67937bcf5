//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::scheduling::error::SchedulingError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Caller is not allowed to see or mutate the resource
    Forbidden(String),
    /// Invalid request (sequencing or admission failure)
    BadRequest(String),
    /// Missing or malformed identity headers
    Unauthorized(String),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::Forbidden(msg) => {
                (StatusCode::FORBIDDEN, ApiError::new("ACCESS_DENIED", msg))
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("VALIDATION_ERROR", msg))
            }
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, ApiError::new("UNAUTHORIZED", msg))
            }
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
        };

        (status, Json(error)).into_response()
    }
}

// NotFound and AccessDenied stay distinct here so clients cannot probe
// record existence through the status code.
impl From<SchedulingError> for AppError {
    fn from(err: SchedulingError) -> Self {
        match err {
            SchedulingError::NotFound(msg) => AppError::NotFound(msg),
            SchedulingError::AccessDenied(msg) => AppError::Forbidden(msg),
            SchedulingError::Validation(msg) => AppError::BadRequest(msg),
            SchedulingError::Repository(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
