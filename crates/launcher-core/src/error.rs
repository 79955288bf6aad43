//! Error types for launcher-core

use thiserror::Error;

/// Result type alias using launcher-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in launcher-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration value is missing or malformed
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
