//! Error types for prompt-shelf-rs
//!
//! This module defines error types for the core library. The store itself
//! never fails hard (bad persisted data and write failures degrade to safe
//! defaults); these errors exist for the command layer and the storage
//! backends underneath it.

use thiserror::Error;

/// Result type alias for prompt-shelf operations
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Main error type for prompt-shelf
#[derive(Debug, Error)]
pub enum ShelfError {
    /// Command not found in registry
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Invalid command arguments
    #[error("Invalid arguments for command '{command}': {reason}")]
    InvalidArgs { command: String, reason: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Storage backend error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Generic error (catch-all)
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for ShelfError {
    fn from(err: anyhow::Error) -> Self {
        ShelfError::Other(err.to_string())
    }
}

impl From<String> for ShelfError {
    fn from(err: String) -> Self {
        ShelfError::Other(err)
    }
}

impl From<&str> for ShelfError {
    fn from(err: &str) -> Self {
        ShelfError::Other(err.to_string())
    }
}

impl ShelfError {
    /// Get user-friendly error message for display by a frontend
    pub fn user_message(&self) -> String {
        match self {
            ShelfError::CommandNotFound(cmd) => {
                format!("Command '{}' is not available.", cmd)
            },
            ShelfError::InvalidArgs { command, reason } => {
                format!("Invalid arguments for '{}': {}", command, reason)
            },
            ShelfError::StorageError(msg) => {
                format!("Storage error: {}", msg)
            },
            _ => self.to_string(),
        }
    }

    /// Get error category for logging/telemetry
    pub fn category(&self) -> &'static str {
        match self {
            ShelfError::CommandNotFound(_) => "command",
            ShelfError::InvalidArgs { .. } => "arguments",
            ShelfError::SerdeError(_) => "serialization",
            ShelfError::IoError(_) => "io",
            ShelfError::StorageError(_) => "storage",
            ShelfError::Other(_) => "other",
        }
    }
}
