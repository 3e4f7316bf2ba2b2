//! Webhook message builders for orders and reviews.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::Review;

use super::webhook::{Embed, EmbedField, EmbedFooter, WebhookMessage};

/// Accent color for all embeds (teal).
pub const EMBED_COLOR: u32 = 0x0014_b8a6;

const ORDER_FOOTER: &str = "Campus Food Delivery";
const REVIEW_FOOTER: &str = "Campus Food Delivery Reviews";

/// Build the order notification message.
///
/// `description` is the pre-rendered order summary from checkout (location
/// header, item lines, grand total).
#[must_use]
pub fn build_order_message(description: &str, placed_at: DateTime<Utc>) -> WebhookMessage {
    WebhookMessage {
        content: "🛒 **New Order Received!**".to_string(),
        embeds: vec![Embed {
            title: "Order Details".to_string(),
            description: description.to_owned(),
            color: EMBED_COLOR,
            fields: Vec::new(),
            timestamp: iso8601(placed_at),
            footer: EmbedFooter {
                text: ORDER_FOOTER.to_string(),
            },
        }],
    }
}

/// Build the review notification message.
#[must_use]
pub fn build_review_message(review: &Review) -> WebhookMessage {
    WebhookMessage {
        content: "📝 **New Review Submitted!**".to_string(),
        embeds: vec![Embed {
            title: format!("Review from {}", review.author),
            description: review.comment.clone(),
            color: EMBED_COLOR,
            fields: vec![
                EmbedField {
                    name: "Rating".to_string(),
                    value: format!("{} ({})", review.rating.star_glyphs(), review.rating),
                    inline: true,
                },
                EmbedField {
                    name: "Time".to_string(),
                    value: review.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
                    inline: true,
                },
            ],
            timestamp: iso8601(review.created_at),
            footer: EmbedFooter {
                text: REVIEW_FOOTER.to_string(),
            },
        }],
    }
}

/// ISO-8601 timestamp with millisecond precision and a Z suffix.
fn iso8601(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use campus_bites_core::{Rating, ReviewId};

    use super::*;

    fn sample_review() -> Review {
        Review {
            id: ReviewId::new("1733000000000"),
            author: "Amara".to_string(),
            rating: Rating::new(3).unwrap(),
            comment: "Quick delivery to the lab.".to_string(),
            created_at: "2026-01-05T12:30:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_order_message_structure() {
        let placed_at = "2026-01-05T12:30:00Z".parse().unwrap();
        let message = build_order_message("📍 Delivery Location: Main Building", placed_at);

        assert_eq!(message.content, "🛒 **New Order Received!**");
        let embed = message.embeds.first().expect("one embed");
        assert_eq!(embed.title, "Order Details");
        assert_eq!(embed.color, EMBED_COLOR);
        assert_eq!(embed.timestamp, "2026-01-05T12:30:00.000Z");
        assert_eq!(embed.footer.text, "Campus Food Delivery");
    }

    #[test]
    fn test_review_message_contains_author_and_stars() {
        let message = build_review_message(&sample_review());

        let embed = message.embeds.first().expect("one embed");
        assert_eq!(embed.title, "Review from Amara");
        assert_eq!(embed.description, "Quick delivery to the lab.");

        let rating_field = embed
            .fields
            .iter()
            .find(|f| f.name == "Rating")
            .expect("rating field");
        assert_eq!(rating_field.value, "⭐⭐⭐ (3/5)");
        assert!(rating_field.inline);
    }

    #[test]
    fn test_review_message_time_field() {
        let message = build_review_message(&sample_review());

        let embed = message.embeds.first().expect("one embed");
        let time_field = embed
            .fields
            .iter()
            .find(|f| f.name == "Time")
            .expect("time field");
        assert_eq!(time_field.value, "2026-01-05 12:30 UTC");
    }
}
