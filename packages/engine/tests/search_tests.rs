//! Integration tests for fuzzy place search.
//!
//! Each test scopes its candidates with a unique city token in the address,
//! so parallel tests sharing the database never see each other's places.

mod common;

use common::{fixtures, TestHarness};
use engine_core::domains::ingest::resolve_or_create_place;
use engine_core::domains::search::{search_by_address, search_by_name};
use test_context::test_context;
use uuid::Uuid;

fn unique_city() -> String {
    format!("city{}", Uuid::new_v4().simple())
}

async fn seed_place(ctx: &TestHarness, name: &str, city: &str, rating: f64) -> String {
    let mut payload = fixtures::place_payload(name, None, rating);
    payload.address = Some(format!("Main st. 5, {}", city));
    resolve_or_create_place(&payload, &ctx.db_pool)
        .await
        .unwrap()
}

#[test_context(TestHarness)]
#[tokio::test]
#[ignore] // Requires database
async fn exact_name_ranks_first(ctx: &TestHarness) {
    let city = unique_city();
    seed_place(ctx, "Kofeinya Central", &city, 4.0).await;
    let east_id = seed_place(ctx, "Kofeinya East", &city, 5.0).await;
    seed_place(ctx, "Pirogovaya", &city, 3.0).await;

    let results = search_by_name("Kofeinya East", Some(&city), 10, &ctx.db_pool)
        .await
        .unwrap();

    assert!(!results.is_empty());
    assert_eq!(results[0].id, east_id);
    assert!((results[0].yandex_rating - 5.0).abs() < 1e-9);
    assert_eq!(results[0].chain_size, 1);
}

#[test_context(TestHarness)]
#[tokio::test]
#[ignore] // Requires database
async fn irrelevant_names_are_excluded(ctx: &TestHarness) {
    let city = unique_city();
    seed_place(ctx, "Kofeinya Central", &city, 4.0).await;
    seed_place(ctx, "Kofeinya East", &city, 5.0).await;

    let results = search_by_name("Sushi Dvor", Some(&city), 10, &ctx.db_pool)
        .await
        .unwrap();

    assert!(results.is_empty());
}

#[test_context(TestHarness)]
#[tokio::test]
#[ignore] // Requires database
async fn equal_scores_keep_storage_order(ctx: &TestHarness) {
    let city = unique_city();
    let first_id = seed_place(ctx, "Chaynaya Lavka", &city, 4.0).await;
    let second_id = seed_place(ctx, "Chaynaya Lavka", &city, 5.0).await;

    let results = search_by_name("Chaynaya Lavka", Some(&city), 10, &ctx.db_pool)
        .await
        .unwrap();

    let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec![first_id.as_str(), second_id.as_str()]);
}

#[test_context(TestHarness)]
#[tokio::test]
#[ignore] // Requires database
async fn limit_caps_results(ctx: &TestHarness) {
    let city = unique_city();
    for suffix in ["Central", "East", "West"] {
        seed_place(ctx, &format!("Shaurmechnaya {}", suffix), &city, 4.0).await;
    }

    let results = search_by_name("Shaurmechnaya", Some(&city), 2, &ctx.db_pool)
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
}

#[test_context(TestHarness)]
#[tokio::test]
#[ignore] // Requires database
async fn city_filter_scopes_candidates(ctx: &TestHarness) {
    let city_a = unique_city();
    let city_b = unique_city();
    let a_id = seed_place(ctx, "Bliny Dvor", &city_a, 4.0).await;
    seed_place(ctx, "Bliny Dvor", &city_b, 5.0).await;

    let results = search_by_name("Bliny Dvor", Some(&city_a), 10, &ctx.db_pool)
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, a_id);
}

#[test_context(TestHarness)]
#[tokio::test]
#[ignore] // Requires database
async fn shared_name_places_report_chain_size(ctx: &TestHarness) {
    let city = unique_city();
    // Same name, no explicit chain: both join the name-derived chain
    seed_place(ctx, "Piterskaya Pyshechnaya", &city, 4.0).await;
    seed_place(ctx, "Piterskaya Pyshechnaya", &city, 5.0).await;

    let results = search_by_name("Piterskaya Pyshechnaya", Some(&city), 10, &ctx.db_pool)
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.chain_size == 2));
    assert!(results.iter().all(|r| r.honesty_rating.is_none()));
}

#[test_context(TestHarness)]
#[tokio::test]
#[ignore] // Requires database
async fn address_search_reports_no_matches(ctx: &TestHarness) {
    let city = unique_city();
    seed_place(ctx, "Adresnaya Kofeinya", &city, 4.0).await;

    let results = search_by_address("Main st. 5", Some(&city), 10, &ctx.db_pool)
        .await
        .unwrap();

    assert!(results.is_empty());
}
