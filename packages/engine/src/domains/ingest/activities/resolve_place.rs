use anyhow::Result;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::domains::chains::activities::refresh_chain;
use crate::domains::ingest::activities::resolve_chain::resolve_or_create_chain;
use crate::domains::ingest::payload::PlacePayload;
use crate::domains::places::models::{CreatePlace, Place};

/// Insert a place from a payload unless it is already stored.
///
/// New places join their chain (created on demand) and the chain aggregates
/// are refreshed so the new member is counted right away.
pub async fn resolve_or_create_place(payload: &PlacePayload, pool: &PgPool) -> Result<String> {
    if Place::exists(&payload.id, pool).await? {
        debug!(place_id = %payload.id, "Place already stored");
        return Ok(payload.id.clone());
    }

    let chain_id = resolve_or_create_chain(payload.chain_name(), payload.rating, pool).await?;

    let input = CreatePlace {
        id: payload.id.clone(),
        name: payload.name.clone(),
        address: payload.address.clone(),
        description: payload.description.clone(),
        rating: payload.rating,
        chain_id,
    };

    if Place::insert(&input, pool).await?.created() {
        info!(place_id = %payload.id, chain_id, "Created place");
        refresh_chain(chain_id, pool).await?;
    } else {
        debug!(place_id = %payload.id, "Place stored concurrently");
    }

    Ok(payload.id.clone())
}
