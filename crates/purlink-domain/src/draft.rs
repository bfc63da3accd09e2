//! Draft module - extractor output before a record is assembled

use serde::{Deserialize, Serialize};

/// Everything a profile page can tell us about a contact
///
/// A draft is exactly a [`ContactRecord`](crate::ContactRecord) minus the
/// identity and user-supplied fields (`id`, `rating`, `tags`, `comments`,
/// `date_added`). Keeping the shape closed at the type level means a
/// half-built record can never reach storage by accident.
///
/// Every field defaults to its empty value; a page where every heuristic
/// misses extracts as `DraftRecord::default()` with only the URL set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRecord {
    /// Full name, or empty on extraction miss
    pub name: String,

    /// Headline / job title, or empty
    pub title: String,

    /// Current company, or empty
    pub company: String,

    /// Free-text location, or empty
    pub location: String,

    /// Whether the education history mentions Purdue
    pub is_purdue_grad: bool,

    /// 4-digit graduation year as text, or empty
    pub graduation_year: String,

    /// Canonical source-page URL
    pub linkedin_url: String,

    /// Relationship label, or empty
    pub connection_degree: String,

    /// Avatar image URL, or empty
    pub profile_image_url: String,
}
