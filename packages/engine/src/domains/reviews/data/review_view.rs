use chrono::SecondsFormat;
use serde::Serialize;

use crate::domains::reviews::models::Review;

/// Shown when the review has no resolvable author.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// Shown when the author name yields no usable initials.
pub const FALLBACK_INITIALS: &str = "АН";

/// Read-side projection of a review. Stored probabilities and foreign keys
/// stay internal; consumers get the display fields only.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewView {
    pub id: String,
    pub author_name: String,
    pub author_initials: String,
    pub rating: f64,
    pub text: String,
    pub generation_prob: f64,
    pub relevance: Option<f64>,
    pub date: String,
}

impl ReviewView {
    pub fn build(review: &Review, author_name: Option<&str>) -> Self {
        let author_name = author_name.unwrap_or(ANONYMOUS_AUTHOR).to_string();
        Self {
            id: review.id.clone(),
            author_initials: initials(&author_name),
            author_name,
            rating: review.score,
            text: review.feedback.clone(),
            generation_prob: review.llm_prob,
            relevance: relevance_rating(review),
            date: format_date(review),
        }
    }
}

/// First letters of up to two name tokens, uppercased. Purely numeric tokens
/// (profile ids leaking into names) are skipped.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter(|token| !token.chars().all(|c| c.is_numeric()))
        .take(2)
        .filter_map(|token| token.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect();

    if letters.is_empty() {
        FALLBACK_INITIALS.to_string()
    } else {
        letters
    }
}

/// Per-review relevance is not computed yet; the field is reserved in the
/// projection so consumers do not break when it lands.
fn relevance_rating(_review: &Review) -> Option<f64> {
    None
}

fn format_date(review: &Review) -> String {
    review.date.to_rfc3339_opts(SecondsFormat::Secs, true)
}
