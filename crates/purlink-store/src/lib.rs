//! PurdueLink Storage Layer
//!
//! Owns the persisted contact collection. The whole collection lives as
//! one JSON array under a single key of an async key-value storage
//! collaborator; every mutation reads the array, rewrites it, and
//! writes it back whole. That model is deliberately simple: the
//! collection is small, operations arrive one at a time from the host
//! surface, and last-write-wins between concurrent host instances is an
//! accepted limitation rather than something this layer papers over.
//!
//! # Architecture
//!
//! - [`KeyValueStorage`]: the collaborator seam - async `get`/`set` of
//!   string payloads under string keys
//! - [`MemoryStorage`] / [`JsonFileStorage`]: reference implementations
//!   for tests and local use; the production backing store is the
//!   host's
//! - [`ContactRepository`]: insert with identity assignment, bulk read,
//!   delete-by-id, clear-all
//!
//! Storage failures are propagated to the caller unchanged in meaning;
//! there is no retry and no partial rollback. A failed insert leaves
//! the previously persisted state untouched provided the collaborator's
//! write is atomic - that atomicity is part of the collaborator
//! contract, not something enforced here.

#![warn(missing_docs)]

mod error;
mod json_file;
mod memory;
mod repository;
mod storage;

pub use error::StoreError;
pub use json_file::{FileStorageError, JsonFileStorage};
pub use memory::MemoryStorage;
pub use repository::{ContactRepository, STORAGE_KEY};
pub use storage::KeyValueStorage;
