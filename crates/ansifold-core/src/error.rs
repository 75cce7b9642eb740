//! Error types for ansifold

use thiserror::Error;

/// Main error type for ansifold operations
#[derive(Error, Debug)]
pub enum AnsiError {
    /// A value that is not a valid Unicode code point was passed
    /// to the width classifier.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for ansifold operations
pub type Result<T> = std::result::Result<T, AnsiError>;
