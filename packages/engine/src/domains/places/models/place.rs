use anyhow::Result;
use sqlx::PgPool;

use crate::common::InsertOutcome;
use crate::domains::reviews::scoring::FLAG_THRESHOLD;

/// A reviewed venue keyed by its source id. `rating` is the platform rating
/// carried from the payload; the `*_amount` columns are maintained counters
/// over stored reviews.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub description: Option<String>,
    pub rating: f64,
    pub chain_id: Option<i64>,
    pub bot_amount: i32,
    pub spam_amount: i32,
    pub inept_amount: i32,
    pub llm_amount: i32,
    pub reviews_amount: i32,
}

/// Input for creating a place row.
pub struct CreatePlace {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub description: Option<String>,
    pub rating: f64,
    pub chain_id: i64,
}

impl Place {
    pub async fn exists(id: &str, pool: &PgPool) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM places WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_id(id: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM places WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert a place with zeroed counters. Re-ingesting an existing place
    /// is a no-op on the stored row.
    pub async fn insert(input: &CreatePlace, pool: &PgPool) -> Result<InsertOutcome> {
        let result = sqlx::query(
            r#"
            INSERT INTO places (id, name, address, description, rating, chain_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(&input.id)
        .bind(&input.name)
        .bind(&input.address)
        .bind(&input.description)
        .bind(input.rating)
        .bind(input.chain_id)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            Ok(InsertOutcome::AlreadyExists)
        } else {
            Ok(InsertOutcome::Created)
        }
    }

    /// Overwrite the review counters from stored reviews. Each counter is
    /// recomputed independently; a flagged counter counts reviews whose
    /// signal exceeds the flag threshold.
    pub async fn refresh_counters(id: &str, pool: &PgPool) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE places SET
                reviews_amount = (SELECT COUNT(*) FROM reviews WHERE place_id = $1),
                bot_amount = (SELECT COUNT(*) FROM reviews WHERE place_id = $1 AND bot_prob > $2),
                spam_amount = (SELECT COUNT(*) FROM reviews WHERE place_id = $1 AND spam_prob > $2),
                inept_amount = (SELECT COUNT(*) FROM reviews WHERE place_id = $1 AND inept_prob > $2),
                llm_amount = (SELECT COUNT(*) FROM reviews WHERE place_id = $1 AND llm_prob > $2)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(FLAG_THRESHOLD)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM places")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Places whose address contains the city name, case-insensitively.
    pub async fn find_by_city(city: &str, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM places WHERE address ILIKE $1")
            .bind(format!("%{}%", city))
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn count(pool: &PgPool) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM places")
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }
}
