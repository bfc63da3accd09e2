//! File-backed storage: one JSON document holding all keys

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::storage::KeyValueStorage;

/// Errors from the file-backed store
#[derive(Debug, Error)]
pub enum FileStorageError {
    /// Filesystem read or write failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file does not hold a JSON string-to-string map
    #[error("Malformed storage file: {0}")]
    Format(#[from] serde_json::Error),
}

/// [`KeyValueStorage`] backed by a single JSON file on disk
///
/// The file holds one JSON object mapping keys to payload strings. A
/// missing file reads as an empty store. Each `set` rewrites the whole
/// file; with collection-sized payloads that is cheaper than it sounds
/// and keeps the on-disk format trivially inspectable.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_map(&self) -> Result<HashMap<String, String>, FileStorageError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStorage for JsonFileStorage {
    type Error = FileStorageError;

    async fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.read_map().await?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), Self::Error> {
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value);
        let text = serde_json::to_string_pretty(&map)?;
        tokio::fs::write(&self.path, text).await?;
        Ok(())
    }
}
