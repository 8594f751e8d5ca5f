//! Error types for vault generation.

use thiserror::Error;

/// Errors that can occur while generating or loading a vault.
#[derive(Error, Debug)]
pub enum VaultError {
    /// Vault parameters violate a geometric precondition.
    #[error("invalid vault configuration: {0}")]
    Configuration(String),

    /// A serialized vault document is structurally malformed.
    #[error("invalid vault document: {0}")]
    InvalidDocument(String),

    /// Reading or writing a file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for vault operations.
pub type Result<T> = std::result::Result<T, VaultError>;
