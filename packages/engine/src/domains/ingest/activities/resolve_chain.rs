use anyhow::{anyhow, Result};
use sqlx::PgPool;
use tracing::info;

use crate::domains::chains::activities::refresh_chain;
use crate::domains::chains::models::Chain;

/// Look up a chain by name (case-insensitive) or create it.
///
/// The rating hint seeds the chain rating only at creation; an existing
/// chain gets its aggregates refreshed from member places instead.
pub async fn resolve_or_create_chain(name: &str, rating_hint: f64, pool: &PgPool) -> Result<i64> {
    if let Some(chain) = Chain::find_by_name(name, pool).await? {
        refresh_chain(chain.id, pool).await?;
        return Ok(chain.id);
    }

    match Chain::insert(name, rating_hint, pool).await? {
        Some(chain) => {
            info!(chain_id = chain.id, name, "Created chain");
            Ok(chain.id)
        }
        // Lost a create race; the winner's row is there now.
        None => {
            let chain = Chain::find_by_name(name, pool)
                .await?
                .ok_or_else(|| anyhow!("chain vanished after conflicting insert: {}", name))?;
            Ok(chain.id)
        }
    }
}
