//! Datapack payload shapes.
//!
//! Scraped exports arrive as JSON arrays. Place records map straight onto
//! [`PlacePayload`]; review records arrive flat, with the reviewer fields
//! inlined next to the review fields, and are regrouped into
//! [`ReviewPayload`] before ingestion.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A place record from a places datapack.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacePayload {
    #[serde(rename = "place_id")]
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub description: Option<String>,
    pub rating: f64,
    /// Explicit chain name. Absent in older exports, where the place name
    /// doubles as the chain name.
    #[serde(default)]
    pub chain: Option<String>,
}

impl PlacePayload {
    pub fn chain_name(&self) -> &str {
        self.chain.as_deref().unwrap_or(&self.name)
    }
}

/// Reviewer fields of a review record.
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    #[serde(rename = "reviewer_id")]
    pub id: String,
    pub name: String,
    pub total_reviews: i32,
    pub was_photo: bool,
}

/// A review ready for ingestion. `user` is `None` for anonymous reviews.
#[derive(Debug, Clone)]
pub struct ReviewPayload {
    pub id: String,
    pub place_id: String,
    pub user: Option<UserPayload>,
    pub feedback: String,
    pub date: DateTime<Utc>,
    pub score: f64,
}

/// A review record as exported: flat, reviewer fields inlined. Reviewer ids
/// appear as numbers in some exports and strings in others.
#[derive(Debug, Clone, Deserialize)]
pub struct RawReviewRecord {
    pub review_id: String,
    pub place_id: String,
    #[serde(default)]
    pub reviewer_id: Option<serde_json::Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub total_reviews: Option<i32>,
    #[serde(default)]
    pub was_photo: Option<bool>,
    pub feedback: String,
    pub date: DateTime<Utc>,
    pub score: f64,
}

impl RawReviewRecord {
    /// Regroup into a [`ReviewPayload`]. The reviewer block is kept only
    /// when both an id and a name are present; otherwise the review is
    /// treated as anonymous.
    pub fn into_payload(self) -> ReviewPayload {
        let user = match (self.reviewer_id.as_ref().and_then(reviewer_id_string), self.name) {
            (Some(id), Some(name)) => Some(UserPayload {
                id,
                name,
                total_reviews: self.total_reviews.unwrap_or(0),
                was_photo: self.was_photo.unwrap_or(false),
            }),
            _ => None,
        };

        ReviewPayload {
            id: self.review_id,
            place_id: self.place_id,
            user,
            feedback: self.feedback,
            date: self.date,
            score: self.score,
        }
    }
}

fn reviewer_id_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_reviewer_id_becomes_string() {
        let record: RawReviewRecord = serde_json::from_str(
            r#"{
                "review_id": "r1",
                "place_id": "p1",
                "reviewer_id": 42137,
                "name": "Ivan",
                "total_reviews": 7,
                "was_photo": true,
                "feedback": "Great",
                "date": "2024-05-01T10:00:00Z",
                "score": 5.0
            }"#,
        )
        .unwrap();

        let payload = record.into_payload();
        let user = payload.user.unwrap();
        assert_eq!(user.id, "42137");
        assert_eq!(user.total_reviews, 7);
        assert!(user.was_photo);
    }

    #[test]
    fn test_missing_reviewer_yields_anonymous_payload() {
        let record: RawReviewRecord = serde_json::from_str(
            r#"{
                "review_id": "r2",
                "place_id": "p1",
                "feedback": "Fine",
                "date": "2024-05-02T10:00:00Z",
                "score": 3.0
            }"#,
        )
        .unwrap();

        assert!(record.into_payload().user.is_none());
    }

    #[test]
    fn test_reviewer_id_without_name_is_anonymous() {
        let record: RawReviewRecord = serde_json::from_str(
            r#"{
                "review_id": "r3",
                "place_id": "p1",
                "reviewer_id": "u9",
                "feedback": "Ok",
                "date": "2024-05-03T10:00:00Z",
                "score": 4.0
            }"#,
        )
        .unwrap();

        assert!(record.into_payload().user.is_none());
    }

    #[test]
    fn test_place_chain_name_falls_back_to_place_name() {
        let payload: PlacePayload = serde_json::from_str(
            r#"{
                "place_id": "p1",
                "name": "Coffee House",
                "address": "Main st. 1",
                "description": null,
                "rating": 4.2
            }"#,
        )
        .unwrap();

        assert_eq!(payload.chain_name(), "Coffee House");
    }
}
