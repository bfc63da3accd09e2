//! Rating module - the 0-5 contact score

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum contact score
pub const MAX_RATING: u8 = 5;

/// A contact score in [0, 5]; 0 means "unrated"
///
/// Out-of-range values are clamped at construction, never rejected: a
/// score is advisory user input, not something worth failing an insert
/// over.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// The unrated score
    pub const UNRATED: Rating = Rating(0);

    /// Create a rating, clamping anything above 5 down to 5
    ///
    /// # Examples
    ///
    /// ```
    /// use purlink_domain::Rating;
    ///
    /// assert_eq!(Rating::new(3).value(), 3);
    /// assert_eq!(Rating::new(9).value(), 5);
    /// ```
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_RATING))
    }

    /// Get the raw score
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Whether the contact has been scored at all
    pub fn is_rated(&self) -> bool {
        self.0 > 0
    }
}

impl From<u8> for Rating {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
