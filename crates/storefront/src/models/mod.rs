//! Domain models.

pub mod review;

pub use review::{NewReview, Review, ReviewError};
