//! PurdueLink Domain Layer
//!
//! This crate contains the core data model for PurdueLink: the contact
//! records captured from profile pages and the value objects they are
//! built from. It defines the persisted wire shape (camelCase member
//! names) directly on the types, so every other layer agrees on one
//! serialization of the collection.
//!
//! ## Key Concepts
//!
//! - **ContactRecord**: the unit of storage - a saved contact with
//!   identity, rating, tags, and annotations
//! - **DraftRecord**: extractor output - everything a page can tell us,
//!   before identity and user-supplied fields are attached
//! - **Rating**: a 0-5 contact score; 0 means "unrated"
//! - **TagSet**: free-text labels, unique within a record, insertion
//!   order preserved for display
//!
//! ## Architecture
//!
//! - No I/O and no async here; pure data and invariants
//! - Extraction, persistence, and querying live in sibling crates
//! - The draft/record split is enforced at the type level: a draft
//!   cannot reach storage without passing through record assembly

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contact;
pub mod draft;
pub mod rating;
pub mod tags;

// Re-exports for convenience
pub use contact::{ContactId, ContactRecord};
pub use draft::DraftRecord;
pub use rating::Rating;
pub use tags::{TagSet, SEED_TAG};
