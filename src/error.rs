//! Error types for the highscore service
//!
//! Defines module-specific error types using thiserror for clear error propagation.

use thiserror::Error;

/// Common result type for highscore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the highscore service
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// File I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// State file serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
