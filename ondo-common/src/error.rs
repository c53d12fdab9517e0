//! Common error types for ONDO

use thiserror::Error;

/// Common result type for ONDO operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across ONDO services
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network failure or non-success status from an external service
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Expected field absent in an upstream payload
    #[error("Data not found: {0}")]
    DataNotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Feedback file read/write failure
    #[error("Persistence error: {0}")]
    Persistence(String),
}
