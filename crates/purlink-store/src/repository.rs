//! The contact repository - identity assignment and whole-collection
//! persistence

use chrono::{SecondsFormat, Utc};
use purlink_domain::{ContactId, ContactRecord, DraftRecord, Rating, TagSet};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::storage::KeyValueStorage;

/// The single storage key the collection lives under
pub const STORAGE_KEY: &str = "contacts";

/// Owns the persisted contact collection
///
/// Generic over the [`KeyValueStorage`] collaborator. All operations
/// read the whole collection, transform it, and write it back whole;
/// callers invoke them one at a time. Identity (`id`, `date_added`) is
/// assigned here and nowhere else.
pub struct ContactRepository<S> {
    storage: S,
}

impl<S: KeyValueStorage> ContactRepository<S> {
    /// Create a repository over the given storage collaborator
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Insert a draft merged with the caller-supplied fields
    ///
    /// Assigns a fresh unique id and the current UTC timestamp, appends
    /// the finished record to the collection, and returns it. Fails
    /// only when the storage write fails; the prior persisted state is
    /// then untouched (given atomic collaborator writes).
    pub async fn insert(
        &self,
        draft: DraftRecord,
        rating: Rating,
        tags: TagSet,
        comments: impl Into<String>,
    ) -> Result<ContactRecord, StoreError> {
        let mut records = self.read_all().await?;

        let record = ContactRecord::assemble(
            ContactId::new(),
            draft,
            rating,
            tags,
            comments.into(),
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        );
        records.push(record.clone());
        self.write_all(&records).await?;

        info!("Saved contact '{}' ({} in collection)", record.id, records.len());
        Ok(record)
    }

    /// The full persisted collection, in insertion order
    pub async fn list(&self) -> Result<Vec<ContactRecord>, StoreError> {
        let records = self.read_all().await?;
        debug!("Loaded {} contacts", records.len());
        Ok(records)
    }

    /// Remove the record with the given id, if present
    ///
    /// Idempotent: an absent id is not an error, and deleting twice
    /// leaves the collection exactly as one delete would.
    pub async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let mut records = self.read_all().await?;
        let before = records.len();
        records.retain(|r| r.id.as_str() != id);

        if records.len() == before {
            debug!("Delete of unknown contact '{id}' is a no-op");
        } else {
            info!("Deleted contact '{id}'");
        }
        self.write_all(&records).await
    }

    /// Empty the collection unconditionally
    ///
    /// Destructive and unguarded on purpose: confirming with the user
    /// is the host surface's job, not this layer's.
    pub async fn clear(&self) -> Result<(), StoreError> {
        self.write_all(&[]).await?;
        info!("Cleared contact collection");
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<ContactRecord>, StoreError> {
        let payload = self
            .storage
            .get(STORAGE_KEY)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        match payload {
            Some(payload) => Ok(serde_json::from_str(&payload)?),
            None => Ok(Vec::new()),
        }
    }

    async fn write_all(&self, records: &[ContactRecord]) -> Result<(), StoreError> {
        let payload = serde_json::to_string(records)?;
        self.storage
            .set(STORAGE_KEY, payload)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))
    }
}
