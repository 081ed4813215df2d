//! Error types for linkstore
//!
//! Provides a unified error type for all storage operations.

use thiserror::Error;

/// Result type alias using LinkStoreError
pub type Result<T> = std::result::Result<T, LinkStoreError>;

/// Unified error type for linkstore operations
#[derive(Debug, Error)]
pub enum LinkStoreError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Event Log Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Event log corruption at line {line}: {reason}")]
    Corruption { line: u64, reason: String },

    #[error("Event writer is closed")]
    WriterClosed,

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LinkStoreError {
    /// True for errors raised while decoding an existing log line
    pub fn is_corruption(&self) -> bool {
        matches!(self, LinkStoreError::Corruption { .. })
    }
}
