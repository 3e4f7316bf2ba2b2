//! Customer review model and submission validation.

use campus_bites_core::{Rating, ReviewId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Errors rejecting a review submission.
///
/// Checked in form order: name, then rating, then comment. First failure
/// wins, and a rejected submission writes nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewError {
    /// Author name empty after trimming.
    #[error("please enter your name")]
    MissingAuthor,

    /// No star rating selected, or out of the 1-5 range.
    #[error("please select a rating")]
    InvalidRating,

    /// Comment empty after trimming.
    #[error("please write a comment")]
    MissingComment,
}

/// An incoming review submission, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct NewReview {
    pub author: String,
    /// Raw star count; validated into a [`Rating`] on acceptance.
    pub rating: u8,
    pub comment: String,
}

impl NewReview {
    /// Validate the submission and normalize its text fields.
    ///
    /// # Errors
    ///
    /// Returns the first failing check in form order.
    pub fn validate(&self) -> Result<ValidatedReview, ReviewError> {
        let author = self.author.trim();
        if author.is_empty() {
            return Err(ReviewError::MissingAuthor);
        }

        let rating = Rating::new(self.rating).map_err(|_| ReviewError::InvalidRating)?;

        let comment = self.comment.trim();
        if comment.is_empty() {
            return Err(ReviewError::MissingComment);
        }

        Ok(ValidatedReview {
            author: author.to_owned(),
            rating,
            comment: comment.to_owned(),
        })
    }
}

/// A submission that passed validation, ready to be stamped and stored.
#[derive(Debug, Clone)]
pub struct ValidatedReview {
    pub author: String,
    pub rating: Rating,
    pub comment: String,
}

impl ValidatedReview {
    /// Stamp the submission with an id and creation time.
    #[must_use]
    pub fn into_review(self, id: ReviewId, created_at: DateTime<Utc>) -> Review {
        Review {
            id,
            author: self.author,
            rating: self.rating,
            comment: self.comment,
            created_at,
        }
    }
}

/// A stored customer review.
///
/// Never mutated or deleted after creation; there is no edit path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Unique, time-derived id (epoch milliseconds at creation).
    pub id: ReviewId,
    pub author: String,
    pub rating: Rating,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn submission(author: &str, rating: u8, comment: &str) -> NewReview {
        NewReview {
            author: author.to_string(),
            rating,
            comment: comment.to_string(),
        }
    }

    #[test]
    fn test_valid_submission() {
        let validated = submission("Amara", 5, "Great service!").validate().unwrap();
        assert_eq!(validated.author, "Amara");
        assert_eq!(validated.rating.stars(), 5);
    }

    #[test]
    fn test_text_fields_trimmed() {
        let validated = submission("  Amara  ", 4, "  tasty  ").validate().unwrap();
        assert_eq!(validated.author, "Amara");
        assert_eq!(validated.comment, "tasty");
    }

    #[test]
    fn test_missing_author_rejected_first() {
        // Rating is also invalid, but the name check comes first.
        let err = submission("   ", 0, "").validate().unwrap_err();
        assert_eq!(err, ReviewError::MissingAuthor);
    }

    #[test]
    fn test_zero_rating_rejected() {
        let err = submission("Amara", 0, "nice").validate().unwrap_err();
        assert_eq!(err, ReviewError::InvalidRating);
    }

    #[test]
    fn test_out_of_range_rating_rejected() {
        let err = submission("Amara", 6, "nice").validate().unwrap_err();
        assert_eq!(err, ReviewError::InvalidRating);
    }

    #[test]
    fn test_missing_comment_rejected() {
        let err = submission("Amara", 3, "   ").validate().unwrap_err();
        assert_eq!(err, ReviewError::MissingComment);
    }

    #[test]
    fn test_review_serializes_iso8601() {
        let review = submission("Amara", 5, "Great!")
            .validate()
            .unwrap()
            .into_review(
                ReviewId::new("1733000000000"),
                "2026-01-05T12:30:00Z".parse().unwrap(),
            );

        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json["id"], "1733000000000");
        assert_eq!(json["rating"], 5);
        assert_eq!(json["created_at"], "2026-01-05T12:30:00Z");
    }
}
