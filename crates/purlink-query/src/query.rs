//! The query engine - search, tag filter, and sort over a snapshot

use chrono::{DateTime, Utc};
use purlink_domain::ContactRecord;

use crate::tags::ALL_TAGS;

/// Tag predicate for a query
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagFilter {
    /// Match every record
    #[default]
    All,
    /// Match records whose tag set contains this tag exactly
    Tag(String),
}

impl TagFilter {
    /// Parse a filter from its display text
    ///
    /// The sentinel and the empty string mean match-all; anything else
    /// is an exact tag (which may legitimately match nothing).
    pub fn parse(s: &str) -> Self {
        if s.is_empty() || s == ALL_TAGS {
            TagFilter::All
        } else {
            TagFilter::Tag(s.to_string())
        }
    }

    fn matches(&self, record: &ContactRecord) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Tag(tag) => record.tags.contains(tag),
        }
    }
}

impl From<&str> for TagFilter {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// Sort order for the contact list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Most recently added first - the default
    #[default]
    DateAdded,
    /// Highest rating first; ties keep their input order
    Rating,
    /// Name ascending, compared case-insensitively
    Name,
}

impl SortKey {
    /// Get the sort key name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::DateAdded => "dateAdded",
            SortKey::Rating => "rating",
            SortKey::Name => "name",
        }
    }

    /// Parse a sort key from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dateAdded" => Some(SortKey::DateAdded),
            "rating" => Some(SortKey::Rating),
            "name" => Some(SortKey::Name),
            _ => None,
        }
    }

    /// Parse a sort key, falling back to the default on anything
    /// unrecognized
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid sort key: {s}"))
    }
}

/// Filter and order a repository snapshot for display
///
/// The search term matches case-insensitively as a substring of name,
/// company, or title (an empty term matches everything); the tag filter
/// must also accept the record. The two predicates AND together. The
/// surviving records are then ordered by `sort`; all sorts are stable.
pub fn query(
    mut records: Vec<ContactRecord>,
    search_term: &str,
    tag_filter: &TagFilter,
    sort: SortKey,
) -> Vec<ContactRecord> {
    let needle = search_term.to_lowercase();
    records.retain(|r| matches_search(r, &needle) && tag_filter.matches(r));

    match sort {
        SortKey::DateAdded => records.sort_by_key(|r| std::cmp::Reverse(added_at(r))),
        SortKey::Rating => records.sort_by_key(|r| std::cmp::Reverse(r.rating)),
        SortKey::Name => records.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        }),
    }
    records
}

fn matches_search(record: &ContactRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record.name.to_lowercase().contains(needle)
        || record.company.to_lowercase().contains(needle)
        || record.title.to_lowercase().contains(needle)
}

/// Insertion instant of a record; a timestamp that does not parse sorts
/// as the epoch, i.e. oldest
fn added_at(record: &ContactRecord) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(&record.date_added)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::UNIX_EPOCH)
}
