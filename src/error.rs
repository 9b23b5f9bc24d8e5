//! Error types for SiloKV
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Unified error type for SiloKV operations
#[derive(Debug, Error)]
pub enum StoreError {
    // -------------------------------------------------------------------------
    // Lifecycle Errors
    // -------------------------------------------------------------------------
    #[error("failed to open file with path [{}]: {source}", .path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error(
        "store corrupted. Consider deleting [{}] and restarting if you don't mind losing data: {source}",
        .path.display()
    )]
    CorruptedStore {
        path: PathBuf,
        #[source]
        source: rocksdb::Error,
    },

    #[error("store is closed")]
    Closed,

    // -------------------------------------------------------------------------
    // Data Errors
    // -------------------------------------------------------------------------
    #[error("key not found")]
    NotFound,

    #[error("stored bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),

    // -------------------------------------------------------------------------
    // Engine / I/O Errors
    // -------------------------------------------------------------------------
    #[error("engine error: {0}")]
    Engine(#[from] rocksdb::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("home directory could not be determined")]
    HomeDirUnavailable,

    #[error("configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// True when the error reports an absent key
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }
}
