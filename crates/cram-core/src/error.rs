//! Error types for the cram library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all cram operations.
#[derive(Error, Debug)]
pub enum CramError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Task not found for the given ID
    #[error("Task with ID {id} not found")]
    TaskNotFound { id: u64 },
    /// Obstacle not found for the given ID
    #[error("Obstacle with ID {id} not found")]
    ObstacleNotFound { id: u64 },
    /// The storage collaborator could not read or write a document
    #[error("Storage unavailable: {message}")]
    StorageUnavailable {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Coarse classification of [`CramError`] for callers that only need to
/// decide how to react, not what exactly went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or out-of-range input
    Validation,
    /// A referenced task or obstacle does not exist
    NotFound,
    /// The storage collaborator failed
    StorageUnavailable,
    /// Everything else
    Internal,
}

/// Builder for creating storage errors with optional context.
pub struct StorageErrorBuilder {
    message: String,
}

impl StorageErrorBuilder {
    /// Create a new storage error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source<E>(self, source: E) -> CramError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        CramError::StorageUnavailable {
            message: self.message,
            source: Box::new(source),
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> CramError {
        CramError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl CramError {
    /// Creates a builder for storage errors.
    pub fn storage(message: impl Into<String>) -> StorageErrorBuilder {
        StorageErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CramError::InvalidInput { .. } => ErrorKind::Validation,
            CramError::TaskNotFound { .. } | CramError::ObstacleNotFound { .. } => {
                ErrorKind::NotFound
            }
            CramError::StorageUnavailable { .. } => ErrorKind::StorageUnavailable,
            CramError::Serialization { .. }
            | CramError::FileSystem { .. }
            | CramError::XdgDirectory(_)
            | CramError::Configuration { .. } => ErrorKind::Internal,
        }
    }
}

/// Specialized extension trait for storage-related Results.
pub trait StorageResultExt<T> {
    /// Map storage backend errors with a message.
    fn storage_context(self, message: &str) -> Result<T>;
}

impl<T> StorageResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn storage_context(self, message: &str) -> Result<T> {
        self.map_err(|e| CramError::storage(message).with_source(e))
    }
}

/// Result type alias for cram operations
pub type Result<T> = std::result::Result<T, CramError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let invalid = CramError::invalid_input("title").with_reason("must not be empty");
        assert_eq!(invalid.kind(), ErrorKind::Validation);
        assert!(invalid.to_string().contains("'title'"));

        assert_eq!(CramError::TaskNotFound { id: 3 }.kind(), ErrorKind::NotFound);
        assert_eq!(
            CramError::ObstacleNotFound { id: 3 }.kind(),
            ErrorKind::NotFound
        );

        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let storage = CramError::storage("Failed to save document").with_source(io);
        assert_eq!(storage.kind(), ErrorKind::StorageUnavailable);
        assert!(storage.to_string().contains("Failed to save document"));
    }

    #[test]
    fn test_storage_context_maps_rusqlite_errors() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.storage_context("Failed to load").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StorageUnavailable);
    }
}
