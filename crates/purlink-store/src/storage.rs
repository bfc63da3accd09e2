//! The key-value storage seam

use std::fmt;

/// Async key-value storage of string payloads
///
/// The persistence collaborator the repository writes through. The
/// contract is small on purpose: read a value, replace a value, and an
/// absent key reads as `None`. Writes are expected to be atomic at the
/// collaborator level; the repository relies on that for its
/// failed-insert-leaves-prior-state-intact behavior.
#[allow(async_fn_in_trait)]
pub trait KeyValueStorage {
    /// Error type for storage operations
    type Error: fmt::Display;

    /// Read the value stored under `key`; `None` when the key is absent
    async fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write `value` under `key`, replacing any prior value
    async fn set(&self, key: &str, value: String) -> Result<(), Self::Error>;
}
