//! Error types for repository operations

use thiserror::Error;

/// Errors that can occur during repository operations
///
/// Extraction misses never appear here - a blank field is data, not an
/// error. What can fail is the storage collaborator, and a persisted
/// payload that no longer parses as a record collection.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage collaborator rejected a read or write
    #[error("Storage error: {0}")]
    Storage(String),

    /// The persisted payload is not a valid record collection
    #[error("Corrupt collection payload: {0}")]
    Corrupt(#[from] serde_json::Error),
}
