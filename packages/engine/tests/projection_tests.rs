//! Integration tests for the place detail projection.
//!
//! Covers field renames, derived percentages, author handling and the
//! review page bound.

mod common;

use common::{fixtures, TestHarness};
use engine_core::domains::ingest::{ingest_review, resolve_or_create_place};
use engine_core::domains::places::PlaceView;
use engine_core::domains::reviews::ReviewSignals;
use engine_core::kernel::MockFeatureExtractor;
use std::sync::Arc;
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
#[ignore] // Requires database
async fn place_view_assembles_metrics_and_reviews(ctx: &TestHarness) {
    let place = fixtures::place_payload("Projection Cafe", None, 4.3);
    resolve_or_create_place(&place, &ctx.db_pool).await.unwrap();

    let extractor = Arc::new(
        MockFeatureExtractor::new()
            // flagged as both bot and generated
            .with_signals(ReviewSignals {
                bot: 0.9,
                generated: 0.8,
                ..Default::default()
            })
            .with_signals(ReviewSignals::default()),
    );
    let deps = ctx.deps_with(extractor);

    let flagged = fixtures::review_payload(
        &place.id,
        Some(fixtures::user_payload("Ivan Petrov")),
        2.0,
    );
    ingest_review(&flagged, &deps).await.unwrap();
    let clean = fixtures::review_payload(&place.id, None, 5.0);
    ingest_review(&clean, &deps).await.unwrap();

    let view = PlaceView::project(&place.id, 60, &ctx.db_pool)
        .await
        .unwrap()
        .expect("place view");

    assert_eq!(view.id, place.id);
    assert_eq!(view.name, "Projection Cafe");
    assert!((view.yandex_rating - 4.3).abs() < 1e-9);
    assert_eq!(view.chain_size, 1);
    assert_eq!(view.total_reviews, 2);
    assert_eq!(view.controversial_reviews.bot, 1);
    assert_eq!(view.controversial_reviews.generated, 1);
    assert_eq!(view.controversial_reviews.biased, 0);
    // one review counted under both bot and generated
    assert!((view.honest_percentage - 0.0).abs() < 1e-9);
    assert!((view.bot_percentage - 50.0).abs() < 1e-9);
    assert!(view.honest_rating.is_none());
    assert!(view.honesty_rating.is_none());
    assert_eq!(view.reviews.len(), 2);

    let flagged_view = view
        .reviews
        .iter()
        .find(|r| r.id == flagged.id)
        .expect("flagged review in page");
    assert_eq!(flagged_view.author_name, "Ivan Petrov");
    assert_eq!(flagged_view.author_initials, "IP");
    assert!((flagged_view.rating - 2.0).abs() < 1e-9);
    assert_eq!(flagged_view.text, flagged.feedback);
    assert!((flagged_view.generation_prob - 0.8).abs() < 1e-9);
    assert!(flagged_view.relevance.is_none());
    assert!(flagged_view.date.ends_with('Z'));
}

#[test_context(TestHarness)]
#[tokio::test]
#[ignore] // Requires database
async fn unknown_place_projects_to_none(ctx: &TestHarness) {
    let view = PlaceView::project(&fixtures::unique_id("missing"), 60, &ctx.db_pool)
        .await
        .unwrap();
    assert!(view.is_none());
}

#[test_context(TestHarness)]
#[tokio::test]
#[ignore] // Requires database
async fn anonymous_review_projects_placeholder_author(ctx: &TestHarness) {
    let place = fixtures::place_payload("Nameless Cafe", None, 4.0);
    resolve_or_create_place(&place, &ctx.db_pool).await.unwrap();

    let deps = ctx.deps_with(Arc::new(MockFeatureExtractor::new()));
    let payload = fixtures::review_payload(&place.id, None, 4.0);
    ingest_review(&payload, &deps).await.unwrap();

    let view = PlaceView::project(&place.id, 60, &ctx.db_pool)
        .await
        .unwrap()
        .expect("place view");
    assert_eq!(view.reviews[0].author_name, "Anonymous");
    assert_eq!(view.reviews[0].author_initials, "A");
}

#[test_context(TestHarness)]
#[tokio::test]
#[ignore] // Requires database
async fn review_page_is_bounded(ctx: &TestHarness) {
    let place = fixtures::place_payload("Busy Cafe", None, 4.0);
    resolve_or_create_place(&place, &ctx.db_pool).await.unwrap();

    let deps = ctx.deps_with(Arc::new(MockFeatureExtractor::new()));
    for score in [3.0, 4.0, 5.0] {
        let payload = fixtures::review_payload(&place.id, None, score);
        ingest_review(&payload, &deps).await.unwrap();
    }

    let view = PlaceView::project(&place.id, 2, &ctx.db_pool)
        .await
        .unwrap()
        .expect("place view");
    assert_eq!(view.total_reviews, 3);
    assert_eq!(view.reviews.len(), 2);
}

#[test_context(TestHarness)]
#[tokio::test]
#[ignore] // Requires database
async fn place_without_reviews_projects_zeroes(ctx: &TestHarness) {
    let place = fixtures::place_payload("Quiet Cafe", None, 4.0);
    resolve_or_create_place(&place, &ctx.db_pool).await.unwrap();

    let view = PlaceView::project(&place.id, 60, &ctx.db_pool)
        .await
        .unwrap()
        .expect("place view");
    assert_eq!(view.total_reviews, 0);
    assert_eq!(view.honest_percentage, 0.0);
    assert_eq!(view.bot_percentage, 0.0);
    assert!(view.reviews.is_empty());
}
