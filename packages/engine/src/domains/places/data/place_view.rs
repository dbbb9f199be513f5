use anyhow::Result;
use serde::Serialize;
use sqlx::PgPool;

use crate::domains::chains::models::Chain;
use crate::domains::places::models::Place;
use crate::domains::reviews::data::review_view::ReviewView;
use crate::domains::reviews::models::Review;
use crate::domains::users::models::User;

/// Flagged review counts grouped for external consumption. Spam flags stay
/// internal.
#[derive(Debug, Clone, Serialize)]
pub struct ControversialReviews {
    pub generated: i32,
    pub bot: i32,
    pub biased: i32,
}

/// Place detail projection: the stored row plus derived metrics and a
/// bounded page of review views. Internal counters and the chain foreign
/// key are not exposed.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceView {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub description: Option<String>,
    pub yandex_rating: f64,
    pub chain_size: i32,
    pub total_reviews: i32,
    pub controversial_reviews: ControversialReviews,
    pub honest_percentage: f64,
    pub bot_percentage: f64,
    pub honest_rating: Option<f64>,
    pub honesty_rating: Option<f64>,
    pub reviews: Vec<ReviewView>,
}

impl PlaceView {
    /// Load a place and assemble its detail view, or `None` when the id is
    /// unknown.
    pub async fn project(
        place_id: &str,
        review_limit: i64,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        let Some(place) = Place::find_by_id(place_id, pool).await? else {
            return Ok(None);
        };

        let chain_size = match place.chain_id {
            Some(chain_id) => Chain::find_by_id(chain_id, pool)
                .await?
                .map(|c| c.chain_size)
                .unwrap_or(0),
            None => 0,
        };

        let reviews = Review::find_by_place(place_id, review_limit, pool).await?;
        let mut views = Vec::with_capacity(reviews.len());
        for review in &reviews {
            let author = match &review.user_id {
                Some(user_id) => User::find_by_id(user_id, pool).await?,
                None => None,
            };
            views.push(ReviewView::build(review, author.as_ref().map(|u| u.name.as_str())));
        }

        Ok(Some(Self::build(&place, chain_size, views)))
    }

    /// Pure assembly from already-loaded rows.
    pub fn build(place: &Place, chain_size: i32, reviews: Vec<ReviewView>) -> Self {
        let controversial_total = place.llm_amount + place.bot_amount + place.inept_amount;
        Self {
            id: place.id.clone(),
            name: place.name.clone(),
            address: place.address.clone(),
            description: place.description.clone(),
            yandex_rating: place.rating,
            chain_size,
            total_reviews: place.reviews_amount,
            controversial_reviews: ControversialReviews {
                generated: place.llm_amount,
                bot: place.bot_amount,
                biased: place.inept_amount,
            },
            honest_percentage: percentage(
                place.reviews_amount - controversial_total,
                place.reviews_amount,
            ),
            bot_percentage: percentage(place.bot_amount, place.reviews_amount),
            honest_rating: honest_rating(place),
            honesty_rating: honesty_rating(place),
            reviews,
        }
    }
}

/// Search-result row: the fields a result list needs, without loading
/// reviews.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceSummary {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub yandex_rating: f64,
    pub chain_size: i32,
    pub honesty_rating: Option<f64>,
}

impl PlaceSummary {
    pub fn build(place: &Place, chain_size: i32) -> Self {
        Self {
            id: place.id.clone(),
            name: place.name.clone(),
            address: place.address.clone(),
            yandex_rating: place.rating,
            chain_size,
            honesty_rating: honesty_rating(place),
        }
    }
}

/// Share of `part` in `total` as a percentage, rounded to two decimals.
/// Zero when there is nothing to divide by. A review flagged on several
/// signals is counted once per signal, so the honest share can go negative.
fn percentage(part: i32, total: i32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = f64::from(part) / f64::from(total) * 100.0;
    (raw * 100.0).round() / 100.0
}

/// Mean corrected score over honest reviews. The formula is not settled, so
/// the projection reports the value as absent instead of guessing.
fn honest_rating(_place: &Place) -> Option<f64> {
    None
}

/// Composite trustworthiness score for a place. Not computed yet.
fn honesty_rating(_place: &Place) -> Option<f64> {
    None
}
