//! Contact module - the unit of storage in PurdueLink

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::draft::DraftRecord;
use crate::rating::Rating;
use crate::tags::TagSet;

/// Unique identifier for a saved contact, based on UUIDv7
///
/// UUIDv7 provides:
/// - An opaque string form for the persisted layout
/// - Chronological sortability for records inserted in sequence
/// - 128-bit uniqueness with no coordination, so two inserts in the
///   same millisecond still get distinct ids
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    /// Generate a new UUIDv7-based ContactId
    ///
    /// # Examples
    ///
    /// ```
    /// use purlink_domain::ContactId;
    ///
    /// let id = ContactId::new();
    /// assert_eq!(id.as_str().len(), 36);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    /// View the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContactId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ContactId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A saved contact - the unit of storage in PurdueLink
///
/// Records are immutable once created; there is no in-place update path.
/// The only mutations the collection supports are delete-by-id and
/// clear-all. Edits made before the first save are draft-only and never
/// reach storage.
///
/// Serialization uses the persisted member names (`isPurdueGrad`,
/// `dateAdded`, ...) so the stored collection is readable by any client
/// of the same layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    /// Unique identifier, assigned at insertion, immutable thereafter
    pub id: ContactId,

    /// Full name as shown on the profile; empty if extraction missed
    pub name: String,

    /// Headline / job title; empty if extraction missed
    pub title: String,

    /// Current company; empty if extraction missed
    pub company: String,

    /// Free-text location ("City, ST" or "Greater X Area"); may be empty
    pub location: String,

    /// Whether the education history mentions Purdue
    pub is_purdue_grad: bool,

    /// 4-digit graduation year as text, or empty
    pub graduation_year: String,

    /// Canonical source-page URL; set at extraction, never user-editable
    pub linkedin_url: String,

    /// Relationship label such as "1st" or "2nd Level", or empty
    pub connection_degree: String,

    /// Avatar image URL, or empty
    pub profile_image_url: String,

    /// Contact score in [0, 5]; 0 means unrated
    pub rating: Rating,

    /// User-assigned labels, unique within the record
    pub tags: TagSet,

    /// Free-text annotation
    pub comments: String,

    /// ISO-8601 insertion timestamp, set once
    pub date_added: String,
}

impl ContactRecord {
    /// Assemble a finished record from a draft plus the caller-supplied
    /// and identity fields
    ///
    /// This is the only path from a draft to a record; the repository
    /// calls it at insertion time with a fresh id and timestamp.
    pub fn assemble(
        id: ContactId,
        draft: DraftRecord,
        rating: Rating,
        tags: TagSet,
        comments: String,
        date_added: String,
    ) -> Self {
        Self {
            id,
            name: draft.name,
            title: draft.title,
            company: draft.company,
            location: draft.location,
            is_purdue_grad: draft.is_purdue_grad,
            graduation_year: draft.graduation_year,
            linkedin_url: draft.linkedin_url,
            connection_degree: draft.connection_degree,
            profile_image_url: draft.profile_image_url,
            rating,
            tags,
            comments,
            date_added,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_id_unique() {
        let a = ContactId::new();
        let b = ContactId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_contact_id_chronological() {
        // UUIDv7 strings generated in sequence sort by creation time
        let a = ContactId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = ContactId::new();
        assert!(a < b, "earlier id should sort before later id");
    }

    #[test]
    fn test_assemble_carries_draft_fields() {
        let draft = DraftRecord {
            name: "Ada Lovelace".to_string(),
            title: "Engineer at Acme".to_string(),
            company: "Acme".to_string(),
            location: "West Lafayette, IN".to_string(),
            is_purdue_grad: true,
            graduation_year: "2015".to_string(),
            linkedin_url: "https://www.linkedin.com/in/ada".to_string(),
            connection_degree: "1st".to_string(),
            profile_image_url: String::new(),
        };

        let record = ContactRecord::assemble(
            ContactId::from("fixed-id"),
            draft,
            Rating::new(4),
            TagSet::from_iter(["Mentor"]),
            "met at career fair".to_string(),
            "2024-06-15T19:45:12Z".to_string(),
        );

        assert_eq!(record.name, "Ada Lovelace");
        assert_eq!(record.company, "Acme");
        assert_eq!(record.rating.value(), 4);
        assert_eq!(record.date_added, "2024-06-15T19:45:12Z");
    }

    #[test]
    fn test_persisted_member_names() {
        let record = ContactRecord::assemble(
            ContactId::from("id-1"),
            DraftRecord::default(),
            Rating::UNRATED,
            TagSet::new(),
            String::new(),
            "2024-01-01T00:00:00Z".to_string(),
        );

        let json = serde_json::to_value(&record).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "id",
            "name",
            "title",
            "company",
            "location",
            "isPurdueGrad",
            "graduationYear",
            "linkedinUrl",
            "connectionDegree",
            "profileImageUrl",
            "rating",
            "tags",
            "comments",
            "dateAdded",
        ] {
            assert!(obj.contains_key(key), "missing persisted member {key}");
        }
        assert_eq!(obj.len(), 14);
    }

    #[test]
    fn test_persisted_roundtrip() {
        let payload = r#"{
            "id": "1718480712000",
            "name": "Ben",
            "title": "Recruiter",
            "company": "Acme",
            "location": "Chicago Area",
            "isPurdueGrad": false,
            "graduationYear": "",
            "linkedinUrl": "https://www.linkedin.com/in/ben",
            "connectionDegree": "2nd Level",
            "profileImageUrl": "",
            "rating": 3,
            "tags": ["Recruiter"],
            "comments": "",
            "dateAdded": "2024-06-15T19:45:12.000Z"
        }"#;

        let record: ContactRecord = serde_json::from_str(payload).unwrap();
        assert_eq!(record.id.as_str(), "1718480712000");
        assert!(!record.is_purdue_grad);
        assert_eq!(record.rating.value(), 3);
        assert!(record.tags.contains("Recruiter"));

        let back = serde_json::to_string(&record).unwrap();
        let reparsed: ContactRecord = serde_json::from_str(&back).unwrap();
        assert_eq!(record, reparsed);
    }
}
