use anyhow::Result;
use sqlx::PgPool;
use std::collections::HashMap;

/// A brand grouping one or more places. Names are unique case-insensitively;
/// `chain_size` and `rating` are maintained aggregates, never authored.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Chain {
    pub id: i64,
    pub name: String,
    pub chain_size: i32,
    pub rating: f64,
}

impl Chain {
    pub async fn find_by_id(id: i64, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM chains WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_name(name: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM chains WHERE LOWER(name) = LOWER($1)")
            .bind(name)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert a chain with size 1 and the given rating hint. Returns `None`
    /// when a chain with that name (case-insensitive) already exists.
    pub async fn insert(name: &str, rating: f64, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO chains (name, chain_size, rating)
            VALUES ($1, 1, $2)
            ON CONFLICT (LOWER(name)) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(rating)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn update_aggregates(
        id: i64,
        chain_size: i32,
        rating: f64,
        pool: &PgPool,
    ) -> Result<u64> {
        let result = sqlx::query("UPDATE chains SET chain_size = $2, rating = $3 WHERE id = $1")
            .bind(id)
            .bind(chain_size)
            .bind(rating)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Chain sizes for a batch of ids, for annotating search results without
    /// a query per row.
    pub async fn sizes_for(ids: &[i64], pool: &PgPool) -> Result<HashMap<i64, i32>> {
        let rows = sqlx::query_as::<_, (i64, i32)>(
            "SELECT id, chain_size FROM chains WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().collect())
    }

    pub async fn count(pool: &PgPool) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM chains")
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }
}
