use std::io;

use thiserror::Error;

use crate::application::error::ApplicationError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<StorageError> for ApplicationError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::NotFound(path) => ApplicationError::NotFound(path),
            StorageError::PermissionDenied(msg)
            | StorageError::Unsupported(msg)
            | StorageError::IoError(msg) => ApplicationError::StorageError(msg),
        }
    }
}

impl StorageError {
    /// Wraps an I/O failure on `path`, keeping the error classification.
    pub fn from_io(path: &str, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => StorageError::NotFound(path.to_string()),
            io::ErrorKind::PermissionDenied => {
                StorageError::PermissionDenied(format!("{}: {}", path, error))
            }
            _ => StorageError::IoError(format!("{}: {}", path, error)),
        }
    }
}
