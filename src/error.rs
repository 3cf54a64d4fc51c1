//! Error types for jobdesk.

use thiserror::Error;

/// Common error type for jobdesk.
#[derive(Error, Debug)]
pub enum JobdeskError {
    /// Database error.
    ///
    /// This is a generic database error that wraps errors from any database backend.
    /// Database errors from sqlx are automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Uniqueness violation: the record already exists.
    #[error("{0} already exists")]
    Conflict(String),

    /// Permission denied error.
    #[error("permission denied: {0}")]
    Permission(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for JobdeskError {
    fn from(e: sqlx::Error) -> Self {
        JobdeskError::Database(e.to_string())
    }
}

/// Result type alias for jobdesk operations.
pub type Result<T> = std::result::Result<T, JobdeskError>;
