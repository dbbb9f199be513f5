use tracing::{info, warn};

use crate::common::{EngineError, InsertOutcome};
use crate::domains::ingest::activities::resolve_user::resolve_or_create_user;
use crate::domains::ingest::payload::ReviewPayload;
use crate::domains::places::activities::refresh_place;
use crate::domains::places::models::Place;
use crate::domains::reviews::models::{CreateReview, Review};
use crate::domains::reviews::scoring::{corrected_score, validate_raw_score};
use crate::domains::users::activities::refresh_user;
use crate::kernel::EngineDeps;

/// Outcome of a single review ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewIngest {
    Inserted,
    Duplicate,
}

/// Score and store one review, then bring the touched aggregates up to date.
///
/// The classifier is consulted before anything is written, so an extractor
/// failure or an out-of-range signal leaves no trace of the review. Reviews
/// for unknown places are rejected with `NotFound`; batch callers log and
/// move on.
pub async fn ingest_review(
    payload: &ReviewPayload,
    deps: &EngineDeps,
) -> Result<ReviewIngest, EngineError> {
    let pool = &deps.db_pool;

    if !Place::exists(&payload.place_id, pool).await? {
        warn!(
            review_id = %payload.id,
            place_id = %payload.place_id,
            "Unknown place, review skipped"
        );
        return Err(EngineError::not_found("place", &payload.place_id));
    }

    validate_raw_score(payload.score)?;
    let signals = deps.feature_extractor.extract(&payload.feedback).await?;
    signals.validate()?;
    let corrected = corrected_score(&signals, payload.score);

    let user_id = match &payload.user {
        Some(user) => Some(resolve_or_create_user(user, pool).await?),
        None => None,
    };

    let input = CreateReview {
        id: payload.id.clone(),
        place_id: payload.place_id.clone(),
        user_id,
        feedback: payload.feedback.clone(),
        date: payload.date,
        signals,
        score: payload.score,
        corrected_score: corrected,
    };

    if let InsertOutcome::AlreadyExists = Review::insert(&input, pool).await? {
        info!(review_id = %payload.id, "Review already stored");
        return Ok(ReviewIngest::Duplicate);
    }

    refresh_place(&payload.place_id, pool).await?;
    if let Some(user) = &payload.user {
        refresh_user(&user.id, user.was_photo, pool).await?;
    }

    Ok(ReviewIngest::Inserted)
}
