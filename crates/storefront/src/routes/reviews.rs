//! Review board route handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use tracing::instrument;

use crate::error::Result;
use crate::models::{NewReview, Review};
use crate::reviews::ReviewStats;
use crate::services::{build_review_message, webhook};
use crate::state::AppState;

/// Review board response: reviews newest first plus header stats.
#[derive(Debug, Serialize)]
pub struct ReviewBoardResponse {
    pub reviews: Vec<Review>,
    pub stats: ReviewStats,
}

/// Display the review board.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<ReviewBoardResponse> {
    Json(ReviewBoardResponse {
        reviews: state.reviews().all(),
        stats: state.reviews().stats(),
    })
}

/// Submit a review.
///
/// The review is validated and persisted first; the webhook notification
/// afterwards is best-effort and can never lose an accepted review.
#[instrument(skip(state, submission), fields(rating = submission.rating))]
pub async fn create(
    State(state): State<AppState>,
    Json(submission): Json<NewReview>,
) -> Result<(StatusCode, Json<Review>)> {
    let review = state.reviews().add(&submission)?;

    let message = build_review_message(&review);
    webhook::notify(state.webhook(), &message).await;

    Ok((StatusCode::CREATED, Json(review)))
}
