//! Error types for the service layer.

use crate::db::repository::RepositoryError;

/// Result type for scheduling operations.
pub type SchedulingResult<T> = Result<T, SchedulingError>;

/// Error type for scheduling operations.
///
/// `NotFound` and `AccessDenied` are deliberately distinct so that an HTTP
/// adapter maps them to different status codes and clients cannot probe
/// record existence through the error kind.
#[derive(Debug, thiserror::Error)]
pub enum SchedulingError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("{0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for SchedulingError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => SchedulingError::NotFound(msg),
            RepositoryError::ValidationError(msg) => SchedulingError::Validation(msg),
            RepositoryError::ConstraintViolation(msg) => SchedulingError::Validation(msg),
            other => SchedulingError::Repository(other),
        }
    }
}
