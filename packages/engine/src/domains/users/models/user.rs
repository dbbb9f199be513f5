use anyhow::Result;
use sqlx::PgPool;

use crate::common::InsertOutcome;

/// A reviewer profile keyed by its source id.
///
/// `total_reviews` is the platform-wide count reported by the payload, not
/// the number of reviews stored here; `bad_reviews`, `good_reviews` and
/// `probability_bad` are maintained aggregates over stored reviews.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub bad_reviews: i32,
    pub good_reviews: i32,
    pub total_reviews: i32,
    pub probability_bad: f64,
}

impl User {
    pub async fn find_by_id(id: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert a user with zeroed aggregates. Re-ingesting an existing user
    /// is a no-op on the stored row.
    pub async fn insert(
        id: &str,
        name: &str,
        total_reviews: i32,
        pool: &PgPool,
    ) -> Result<InsertOutcome> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, name, bad_reviews, good_reviews, total_reviews, probability_bad)
            VALUES ($1, $2, 0, 0, $3, 0)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(total_reviews)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            Ok(InsertOutcome::AlreadyExists)
        } else {
            Ok(InsertOutcome::Created)
        }
    }

    pub async fn update_stats(
        id: &str,
        bad_reviews: i32,
        good_reviews: i32,
        probability_bad: f64,
        pool: &PgPool,
    ) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET bad_reviews = $2, good_reviews = $3, probability_bad = $4
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(bad_reviews)
        .bind(good_reviews)
        .bind(probability_bad)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn count(pool: &PgPool) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }
}
