use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

use crate::domains::ingest::payload::UserPayload;
use crate::domains::users::activities::refresh_user;
use crate::domains::users::models::User;

/// Insert a user from a payload unless already stored.
///
/// A returning user gets their reliability aggregates refreshed from the
/// reviews already on record; a brand-new user has none, so their zeroed
/// aggregates stand.
pub async fn resolve_or_create_user(payload: &UserPayload, pool: &PgPool) -> Result<String> {
    let outcome = User::insert(&payload.id, &payload.name, payload.total_reviews, pool).await?;

    if outcome.created() {
        info!(user_id = %payload.id, "Created user");
    } else {
        refresh_user(&payload.id, payload.was_photo, pool).await?;
    }

    Ok(payload.id.clone())
}
