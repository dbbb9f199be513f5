use anyhow::Result;
use sqlx::PgPool;
use tracing::warn;

use crate::domains::chains::models::Chain;

/// Recompute a chain's member count and mean place rating from its places.
///
/// A chain with no member places keeps its stored rating and resets to
/// size 1, so a freshly created chain never reads as empty.
pub async fn refresh_chain(chain_id: i64, pool: &PgPool) -> Result<()> {
    let (count, avg_rating) = sqlx::query_as::<_, (i64, Option<f64>)>(
        "SELECT COUNT(*), AVG(rating) FROM places WHERE chain_id = $1",
    )
    .bind(chain_id)
    .fetch_one(pool)
    .await?;

    let updated = if count == 0 {
        warn!(chain_id, "Refreshing chain with no member places");
        sqlx::query("UPDATE chains SET chain_size = 1 WHERE id = $1")
            .bind(chain_id)
            .execute(pool)
            .await?
            .rows_affected()
    } else {
        Chain::update_aggregates(chain_id, count as i32, avg_rating.unwrap_or(0.0), pool).await?
    };

    if updated == 0 {
        warn!(chain_id, "Chain refresh matched no row");
    }

    Ok(())
}
