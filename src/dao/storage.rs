use std::error::Error;
use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by storage backends regardless of the underlying database.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage fault: {message}")]
    Fault {
        message: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl StorageError {
    /// Construct a storage fault from any backend failure.
    pub fn fault(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Fault {
            message,
            source: Box::new(source),
        }
    }
}
