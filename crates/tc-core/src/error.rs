//! Error types for the persistence layer.

use thiserror::Error;

/// Failure reported by a [`KeyValueStore`](crate::persist::KeyValueStore)
/// backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read key `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write key `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// Failure while writing the document to a store.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to encode canvas state: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}
