use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Result alias returned by the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors returned by services and translated into HTTP responses by routes.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The caller supplied a value that cannot be coerced or fails validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The requested record does not exist.
    #[error("not found")]
    NotFound,
    /// The database could not be reached or the statement failed.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
    /// A filesystem operation failed.
    #[error("io error: {0}")]
    Io(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::StorageUnavailable(other.to_string()),
        }
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(value: std::io::Error) -> Self {
        ServiceError::Io(value.to_string())
    }
}
