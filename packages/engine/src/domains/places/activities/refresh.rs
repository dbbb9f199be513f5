use anyhow::Result;
use sqlx::PgPool;
use tracing::warn;

use crate::domains::places::models::Place;

/// Recompute a place's review counters from its stored reviews.
pub async fn refresh_place(place_id: &str, pool: &PgPool) -> Result<()> {
    let updated = Place::refresh_counters(place_id, pool).await?;
    if updated == 0 {
        warn!(place_id, "Place refresh matched no row");
    }
    Ok(())
}
