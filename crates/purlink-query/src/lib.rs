//! PurdueLink Query Layer
//!
//! Read-model transformations over a repository snapshot: the derived
//! tag taxonomy and the search/filter/sort pipeline behind the contact
//! list. Everything here is pure - no I/O, no mutation of the snapshot,
//! and no way to fail. Degenerate arguments (an unknown sort key, a
//! blank filter) fall back to defaults instead of erroring, because a
//! stale or hand-edited host surface must never take the list down.

#![warn(missing_docs)]

mod query;
mod tags;

pub use query::{query, SortKey, TagFilter};
pub use tags::{derive_tags, ALL_TAGS};
