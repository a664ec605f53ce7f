use thiserror::Error;

/// Error type for repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Referenced record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// A uniqueness rule would be broken
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The backing document could not be written or read
    #[error("Storage error: {0}")]
    Storage(String),

    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Document (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Mutex lock error
    #[error("Mutex lock error: {0}")]
    MutexLock(String),
}

impl RepositoryError {
    /// True for failures of the backing store rather than of the caller's input
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            RepositoryError::Storage(_)
                | RepositoryError::Io(_)
                | RepositoryError::Serialization(_)
                | RepositoryError::MutexLock(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_classification() {
        assert!(RepositoryError::Storage("disk full".to_string()).is_storage());
        assert!(RepositoryError::MutexLock("poisoned".to_string()).is_storage());
        assert!(!RepositoryError::NotFound("apt_1".to_string()).is_storage());
        assert!(!RepositoryError::Conflict("dup".to_string()).is_storage());
    }
}
