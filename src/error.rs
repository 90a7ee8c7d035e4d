use thiserror::Error;

/// Main error type for Treckit
#[derive(Error, Debug)]
pub enum TreckitError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Non-integer query identifier text
    #[error("Invalid query identifier: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    /// Malformed JSON in a stored document record
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Parse errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Document not found
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenient Result type using TreckitError
pub type Result<T> = std::result::Result<T, TreckitError>;
