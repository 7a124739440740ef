use std::sync::PoisonError;
use thiserror::Error;

/// Error type for repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Lock error
    #[error("Lock error: {0}")]
    Lock(String),

    /// Not found error
    #[error("Reading not found: {0}")]
    NotFound(String),

    /// Storage backend unavailable
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl<T> From<PoisonError<T>> for RepositoryError {
    fn from(error: PoisonError<T>) -> Self {
        RepositoryError::Lock(error.to_string())
    }
}
