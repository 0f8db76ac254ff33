//! Storage error types.

use thiserror::Error;

/// Errors that can occur reading or writing the device store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem error.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Value could not be serialized.
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
