//! In-memory storage, for tests and ephemeral use

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::storage::KeyValueStorage;

/// Mutex-guarded map implementing [`KeyValueStorage`]
///
/// Clones share the same underlying map, mirroring how separate handles
/// to a real backing store see each other's writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    type Error = Infallible;

    async fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), Self::Error> {
        self.values.lock().await.insert(key.to_string(), value);
        Ok(())
    }
}
