use anyhow::Result;
use sqlx::PgPool;

use crate::domains::chains::models::Chain;
use crate::domains::places::data::place_view::PlaceSummary;
use crate::domains::places::models::Place;
use crate::domains::search::ratio::{token_ratio, RELEVANCE_FLOOR};

/// A candidate that cleared the relevance floor. `index` points into the
/// candidate list as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedMatch {
    pub index: usize,
    pub score: f64,
}

/// Rank candidate names against a query, best first, capped at `limit`.
///
/// Candidates below the relevance floor are dropped. The sort is stable, so
/// equal scores keep the candidates' original order.
pub fn rank_candidates<'a, I>(query: &str, candidates: I, limit: usize) -> Vec<RankedMatch>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut matches: Vec<RankedMatch> = candidates
        .into_iter()
        .enumerate()
        .map(|(index, name)| RankedMatch {
            index,
            score: token_ratio(query, name),
        })
        .filter(|m| m.score >= RELEVANCE_FLOOR)
        .collect();

    matches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(limit);
    matches
}

/// Fuzzy-search stored places by name, optionally narrowed to places whose
/// address mentions the city.
pub async fn search_by_name(
    query: &str,
    city: Option<&str>,
    limit: usize,
    pool: &PgPool,
) -> Result<Vec<PlaceSummary>> {
    let places = match city {
        Some(city) => Place::find_by_city(city, pool).await?,
        None => Place::find_all(pool).await?,
    };

    let ranked = rank_candidates(query, places.iter().map(|p| p.name.as_str()), limit);

    let chain_ids: Vec<i64> = ranked
        .iter()
        .filter_map(|m| places[m.index].chain_id)
        .collect();
    let chain_sizes = Chain::sizes_for(&chain_ids, pool).await?;

    Ok(ranked
        .iter()
        .map(|m| {
            let place = &places[m.index];
            let chain_size = place
                .chain_id
                .and_then(|id| chain_sizes.get(&id).copied())
                .unwrap_or(0);
            PlaceSummary::build(place, chain_size)
        })
        .collect())
}

/// Address search needs geocoding and distance ranking, neither of which is
/// wired up. Reports no matches rather than pretending.
pub async fn search_by_address(
    _address: &str,
    _city: Option<&str>,
    _limit: usize,
    _pool: &PgPool,
) -> Result<Vec<PlaceSummary>> {
    Ok(Vec::new())
}
