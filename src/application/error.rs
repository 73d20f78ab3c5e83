use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Attribute '{0}' holds no file path")]
    EmptyAttribute(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}
