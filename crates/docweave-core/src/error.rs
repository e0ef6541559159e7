//! Error types for docweave

use thiserror::Error;

/// Main error type for docweave operations
#[derive(Error, Debug)]
pub enum DocweaveError {
    /// IO error on the input or output stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for docweave operations
pub type Result<T> = std::result::Result<T, DocweaveError>;
