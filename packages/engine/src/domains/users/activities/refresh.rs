use anyhow::Result;
use sqlx::PgPool;
use tracing::warn;

use crate::domains::reviews::scoring::FLAG_THRESHOLD;
use crate::domains::users::models::User;

/// Multiplier on the mean signal over a user's stored reviews.
const HISTORY_WEIGHT: f64 = 1.2;

/// Discount for reviewers who attach photos.
const PHOTO_BIAS: f64 = 0.5;

/// Recompute a user's reliability aggregates from their stored reviews.
///
/// A review is bad when any single signal exceeds the flag threshold.
/// `probability_bad` weights the mean signal across the user's reviews,
/// discounts photo evidence, and clamps at zero. `total_reviews` stays as
/// reported by the payload.
pub async fn refresh_user(user_id: &str, was_photo: bool, pool: &PgPool) -> Result<()> {
    let bad_reviews = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM reviews
        WHERE user_id = $1
          AND (bot_prob > $2 OR spam_prob > $2 OR inept_prob > $2 OR llm_prob > $2)
        "#,
    )
    .bind(user_id)
    .bind(FLAG_THRESHOLD)
    .fetch_one(pool)
    .await?;

    let stored_reviews =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reviews WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await?;

    let mean_signal = sqlx::query_scalar::<_, Option<f64>>(
        r#"
        SELECT AVG((bot_prob + spam_prob + inept_prob + llm_prob) / 4.0)
        FROM reviews WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    let photo_bias = if was_photo { PHOTO_BIAS } else { 0.0 };
    let probability_bad = (mean_signal.unwrap_or(0.0) * HISTORY_WEIGHT - photo_bias).max(0.0);
    let good_reviews = stored_reviews - bad_reviews;

    let updated = User::update_stats(
        user_id,
        bad_reviews as i32,
        good_reviews as i32,
        probability_bad,
        pool,
    )
    .await?;

    if updated == 0 {
        warn!(user_id, "User refresh matched no row");
    }

    Ok(())
}
