//! PurdueLink Extractor
//!
//! Turns a profile page snapshot into a [`DraftRecord`] using layered
//! fallback heuristics per field.
//!
//! # Overview
//!
//! Profile markup is not a contract: class names churn, sections move,
//! and a half-loaded page may be missing whole subtrees. Each field is
//! therefore extracted by a *matcher chain* - an ordered list of probes
//! tried most-specific first, where the first non-empty hit wins and a
//! total miss yields the field's empty value. Extraction never fails;
//! the worst case is a draft with blank fields the user can fill in by
//! hand.
//!
//! # Architecture
//!
//! ```text
//! PageSource → (settle delay) → ProfilePage → matcher chains → DraftRecord
//! ```
//!
//! The snapshot is taken once and every chain runs against it; nothing
//! re-queries the live page mid-extraction, and nothing here mutates it.
//!
//! # Example Usage
//!
//! ```
//! use purlink_extractor::{extract, ProfilePage};
//!
//! let page = ProfilePage::new(
//!     "https://www.linkedin.com/in/ada",
//!     r#"<h1 class="text-heading-xlarge">Ada Lovelace</h1>"#,
//! );
//!
//! let draft = extract(&page);
//! assert_eq!(draft.name, "Ada Lovelace");
//! assert_eq!(draft.linkedin_url, "https://www.linkedin.com/in/ada");
//! ```

#![warn(missing_docs)]

mod extractor;
mod fields;
mod page;
mod probes;
mod scan;
mod source;


pub use extractor::extract;
pub use page::ProfilePage;
pub use probes::{ImageProbe, Probe};
pub use source::{snapshot_settled, PageSource, SETTLE_DELAY};

use purlink_domain::DraftRecord;

/// Capture a settled snapshot from `source` and extract a draft from it
///
/// Convenience composition of [`snapshot_settled`] and [`extract`].
pub async fn extract_settled<S: PageSource>(source: &S) -> DraftRecord {
    let page = snapshot_settled(source).await;
    extract(&page)
}
