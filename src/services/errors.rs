use thiserror::Error;

use crate::repository::RepositoryError;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// The request body is missing fields or carries invalid values.
    #[error("validation failed: {0}")]
    Validation(String),
    /// The store refused the write, e.g. an unknown category.
    #[error("rejected by storage: {0}")]
    Rejected(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

impl ServiceError {
    /// Map a repository failure onto a service error, logging the cause.
    pub fn from_repository(context: &str, err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ConstraintViolation(message) => {
                log::warn!("{context}: {message}");
                ServiceError::Rejected(message)
            }
            other => {
                log::error!("{context}: {other}");
                ServiceError::Internal
            }
        }
    }
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
