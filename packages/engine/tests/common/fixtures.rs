//! Test fixtures for building datapack payloads.
//!
//! Tests share one database, so every fixture id is uniqued per call and
//! never collides across parallel tests.

use chrono::Utc;
use engine_core::domains::ingest::{PlacePayload, ReviewPayload, UserPayload};
use uuid::Uuid;

pub fn unique_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

/// A place payload with a fresh id. `chain` of `None` makes the place name
/// double as the chain name.
pub fn place_payload(name: &str, chain: Option<&str>, rating: f64) -> PlacePayload {
    PlacePayload {
        id: unique_id("place"),
        name: name.to_string(),
        address: Some("Test st. 1, Springfield".to_string()),
        description: None,
        rating,
        chain: chain.map(str::to_string),
    }
}

/// A user payload with a fresh id.
pub fn user_payload(name: &str) -> UserPayload {
    UserPayload {
        id: unique_id("user"),
        name: name.to_string(),
        total_reviews: 10,
        was_photo: false,
    }
}

/// A review payload with a fresh id against the given place.
pub fn review_payload(place_id: &str, user: Option<UserPayload>, score: f64) -> ReviewPayload {
    ReviewPayload {
        id: unique_id("review"),
        place_id: place_id.to_string(),
        user,
        feedback: "Nice place, will come again".to_string(),
        date: Utc::now(),
        score,
    }
}
