//! Tag index - the derived taxonomy of tags in use

use std::collections::BTreeSet;

use purlink_domain::ContactRecord;

/// Sentinel tag meaning "match every record"
pub const ALL_TAGS: &str = "All";

/// The sorted set of distinct tags in use, sentinel first
///
/// Derived fresh from a snapshot on every read and never persisted.
/// Over an empty collection this is exactly `["All"]`.
pub fn derive_tags(records: &[ContactRecord]) -> Vec<String> {
    let distinct: BTreeSet<&str> = records.iter().flat_map(|r| r.tags.iter()).collect();

    let mut index = Vec::with_capacity(distinct.len() + 1);
    index.push(ALL_TAGS.to_string());
    index.extend(distinct.into_iter().map(str::to_string));
    index
}
