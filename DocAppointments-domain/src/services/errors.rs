use thiserror::Error;

use doc_appointments_data::repository::RepositoryError;

/// Errors returned by the domain services
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Malformed, missing or out-of-range input
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A referenced record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// A uniqueness rule would be broken
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The backing store failed
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ServiceError {
    /// The message without the category prefix, suitable for clients
    pub fn message(&self) -> &str {
        match self {
            ServiceError::ValidationError(msg)
            | ServiceError::NotFound(msg)
            | ServiceError::Conflict(msg)
            | ServiceError::RepositoryError(msg) => msg,
        }
    }
}

/// Map repository errors to service errors
impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => ServiceError::NotFound(msg),
            RepositoryError::Conflict(msg) => ServiceError::Conflict(msg),
            other => ServiceError::RepositoryError(other.to_string()),
        }
    }
}
