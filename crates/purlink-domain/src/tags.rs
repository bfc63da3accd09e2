//! Tag module - user-assigned labels on a contact

use std::fmt;

use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Label the editing surface seeds a new draft's tag set with
pub const SEED_TAG: &str = "Potential Employer";

/// An ordered set of free-text labels
///
/// Tags are unique within a record under case-sensitive exact match
/// ("Mentor" and "mentor" are two different tags), and insertion order is
/// preserved for display. Inserted values are trimmed; empty values are
/// ignored.
///
/// Serializes as a plain JSON array of strings. Deserialization re-applies
/// the uniqueness rule, so a hand-edited payload with duplicates collapses
/// rather than violating the invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    values: Vec<String>,
}

impl TagSet {
    /// Create an empty tag set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the default set for a fresh draft: just the seed label
    pub fn seeded() -> Self {
        Self::from_iter([SEED_TAG])
    }

    /// Add a tag; returns false when the trimmed value is empty or
    /// already present
    pub fn insert(&mut self, tag: impl AsRef<str>) -> bool {
        let trimmed = tag.as_ref().trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return false;
        }
        self.values.push(trimmed.to_string());
        true
    }

    /// Remove a tag by exact match; returns false when absent
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.values.len();
        self.values.retain(|t| t != tag);
        before != self.values.len()
    }

    /// Case-sensitive membership test
    pub fn contains(&self, tag: &str) -> bool {
        self.values.iter().any(|t| t == tag)
    }

    /// Iterate the tags in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Number of tags
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

impl Serialize for TagSet {
    fn serialize<Sr: Serializer>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error> {
        let mut seq = serializer.serialize_seq(Some(self.values.len()))?;
        for tag in &self.values {
            seq.serialize_element(tag)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for TagSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TagSetVisitor;

        impl<'de> Visitor<'de> for TagSetVisitor {
            type Value = TagSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a sequence of tag strings")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<TagSet, A::Error> {
                let mut set = TagSet::new();
                while let Some(tag) = seq.next_element::<String>()? {
                    set.insert(tag);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(TagSetVisitor)
    }
}
