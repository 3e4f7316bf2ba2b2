//! Star rating type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingError {
    /// The value is outside the 1-5 range.
    #[error("rating must be between {min} and {max} stars", min = Rating::MIN, max = Rating::MAX)]
    OutOfRange,
}

/// A star rating from 1 to 5.
///
/// A rating of 0 is not representable: a review form that has not had a
/// star selected yet carries no `Rating` at all, and submission is rejected
/// before one is constructed.
///
/// ## Examples
///
/// ```
/// use campus_bites_core::Rating;
///
/// assert!(Rating::new(3).is_ok());
/// assert!(Rating::new(0).is_err());
/// assert!(Rating::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Minimum allowed rating.
    pub const MIN: u8 = 1;
    /// Maximum allowed rating.
    pub const MAX: u8 = 5;

    /// Create a `Rating`, validating the 1-5 range.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] if `value` is 0 or greater than 5.
    pub const fn new(value: u8) -> Result<Self, RatingError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(RatingError::OutOfRange)
        }
    }

    /// Get the rating as a number of stars.
    #[must_use]
    pub const fn stars(&self) -> u8 {
        self.0
    }

    /// Render the rating as a run of star glyphs (e.g., "⭐⭐⭐").
    #[must_use]
    pub fn star_glyphs(&self) -> String {
        "⭐".repeat(usize::from(self.0))
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range() {
        for value in 1..=5 {
            assert!(Rating::new(value).is_ok());
        }
    }

    #[test]
    fn test_zero_rejected() {
        assert_eq!(Rating::new(0), Err(RatingError::OutOfRange));
    }

    #[test]
    fn test_above_max_rejected() {
        assert_eq!(Rating::new(6), Err(RatingError::OutOfRange));
        assert_eq!(Rating::new(u8::MAX), Err(RatingError::OutOfRange));
    }

    #[test]
    fn test_star_glyphs() {
        assert_eq!(Rating::new(3).unwrap().star_glyphs(), "⭐⭐⭐");
        assert_eq!(Rating::new(1).unwrap().star_glyphs(), "⭐");
    }

    #[test]
    fn test_display() {
        assert_eq!(Rating::new(4).unwrap().to_string(), "4/5");
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let parsed: Result<Rating, _> = serde_json::from_str("0");
        assert!(parsed.is_err());

        let parsed: Rating = serde_json::from_str("5").unwrap();
        assert_eq!(parsed.stars(), 5);
    }
}
