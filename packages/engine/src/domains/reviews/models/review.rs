use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::common::InsertOutcome;
use crate::domains::reviews::scoring::ReviewSignals;

/// A scored review as stored. Signals and the corrected score are computed
/// once at ingestion and never recomputed.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Review {
    pub id: String,
    pub place_id: String,
    pub user_id: Option<String>,
    pub feedback: String,
    pub date: DateTime<Utc>,
    pub bot_prob: f64,
    pub spam_prob: f64,
    pub inept_prob: f64,
    pub llm_prob: f64,
    pub score: f64,
    pub corrected_score: f64,
}

/// Input for creating a review row.
pub struct CreateReview {
    pub id: String,
    pub place_id: String,
    pub user_id: Option<String>,
    pub feedback: String,
    pub date: DateTime<Utc>,
    pub signals: ReviewSignals,
    pub score: f64,
    pub corrected_score: f64,
}

impl Review {
    pub async fn find_by_id(id: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM reviews WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Reviews for a place in storage order, capped at `limit`.
    pub async fn find_by_place(place_id: &str, limit: i64, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM reviews WHERE place_id = $1 LIMIT $2")
            .bind(place_id)
            .bind(limit)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert a review, keyed by its source id. A second ingest of the same
    /// review leaves the stored row untouched.
    pub async fn insert(input: &CreateReview, pool: &PgPool) -> Result<InsertOutcome> {
        let result = sqlx::query(
            r#"
            INSERT INTO reviews (
                id, place_id, user_id, feedback, date,
                bot_prob, spam_prob, inept_prob, llm_prob,
                score, corrected_score
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(&input.id)
        .bind(&input.place_id)
        .bind(&input.user_id)
        .bind(&input.feedback)
        .bind(input.date)
        .bind(input.signals.bot)
        .bind(input.signals.spam)
        .bind(input.signals.inept)
        .bind(input.signals.generated)
        .bind(input.score)
        .bind(input.corrected_score)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            Ok(InsertOutcome::AlreadyExists)
        } else {
            Ok(InsertOutcome::Created)
        }
    }

    pub async fn count(pool: &PgPool) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reviews")
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }
}
