//! Review board store with file-backed persistence.
//!
//! The review sequence lives in memory, newest first, and the whole
//! sequence is rewritten to a single JSON file slot after every addition.
//! Startup reads the slot once; an absent or malformed file yields an empty
//! board, never an error. Reviews are append-only: no edit or delete path
//! exists.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use campus_bites_core::ReviewId;
use chrono::Utc;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::models::{NewReview, Review, ReviewError};

/// Aggregate figures for the review board header.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReviewStats {
    /// Number of reviews on the board.
    pub total: usize,
    /// Mean star rating, rounded to one decimal. 0.0 when the board is empty.
    pub average_rating: f64,
}

/// Shared handle to the review board.
#[derive(Debug, Clone)]
pub struct ReviewStore {
    inner: Arc<ReviewStoreInner>,
}

#[derive(Debug)]
struct ReviewStoreInner {
    path: PathBuf,
    reviews: RwLock<Vec<Review>>,
}

impl ReviewStore {
    /// Load the review board from its persistence file.
    ///
    /// An absent or malformed file yields an empty board; the malformed
    /// case is logged and the file is left alone until the next write.
    #[must_use]
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let reviews = read_reviews(&path);
        info!(count = reviews.len(), path = %path.display(), "Review board loaded");

        Self {
            inner: Arc::new(ReviewStoreInner {
                path,
                reviews: RwLock::new(reviews),
            }),
        }
    }

    /// Validate and store a review submission.
    ///
    /// The accepted review is stamped with a time-derived id, prepended to
    /// the board, and the full sequence is persisted before returning.
    /// A persistence failure is logged but does not reject the review.
    ///
    /// # Errors
    ///
    /// Returns a [`ReviewError`] when validation fails; nothing is written.
    pub fn add(&self, submission: &NewReview) -> Result<Review, ReviewError> {
        let validated = submission.validate()?;

        let mut reviews = self
            .inner
            .reviews
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let created_at = Utc::now();
        let id = next_id(created_at.timestamp_millis(), reviews.first());
        let review = validated.into_review(id, created_at);

        reviews.insert(0, review.clone());

        if let Err(e) = persist(&self.inner.path, &reviews) {
            error!(error = %e, path = %self.inner.path.display(), "Failed to persist reviews");
        }

        Ok(review)
    }

    /// All reviews, newest first.
    #[must_use]
    pub fn all(&self) -> Vec<Review> {
        self.inner
            .reviews
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Aggregate figures for the board header.
    #[must_use]
    pub fn stats(&self) -> ReviewStats {
        let reviews = self
            .inner
            .reviews
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        let total = reviews.len();
        let average_rating = if total == 0 {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)] // Review counts stay far below f64 precision
            let mean = reviews
                .iter()
                .map(|r| f64::from(r.rating.stars()))
                .sum::<f64>()
                / total as f64;
            (mean * 10.0).round() / 10.0
        };

        ReviewStats {
            total,
            average_rating,
        }
    }
}

/// Derive the next review id from the clock, keeping ids unique and
/// monotonic when two submissions land in the same millisecond.
fn next_id(now_millis: i64, newest: Option<&Review>) -> ReviewId {
    let floor = newest
        .and_then(|r| r.id.as_str().parse::<i64>().ok())
        .map_or(now_millis, |newest_ms| now_millis.max(newest_ms + 1));
    ReviewId::new(floor.to_string())
}

fn read_reviews(path: &Path) -> Vec<Review> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return Vec::new(),
    };

    match serde_json::from_str(&raw) {
        Ok(reviews) => reviews,
        Err(e) => {
            warn!(error = %e, path = %path.display(), "Malformed review file, starting empty");
            Vec::new()
        }
    }
}

fn persist(path: &Path, reviews: &[Review]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string(reviews)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;

    Ok(())
}
