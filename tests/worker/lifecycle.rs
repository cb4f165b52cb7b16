//! Tests for starting and stopping the background index worker.

use std::time::Duration;

use placetree::{
    data::{autocomplete::AutocompleteRepository, place::PlaceRepository},
    model::worker::IndexJob,
};

use super::*;

/// Tests that a started worker picks up queued jobs and stops on request.
///
/// Expected: the row appears while running, is_running() is false after stop()
#[tokio::test]
async fn processes_jobs_until_stopped() {
    let test = TestBuilder::new()
        .with_place_tables()
        .with_autocomplete_table("en")
        .with_continent("EU", "Europe")
        .build()
        .await
        .expect("Failed to create test setup");
    let europe = PlaceRepository::new(&test.db)
        .find_continent_by_code("EU")
        .await
        .expect("Failed to query continent")
        .expect("Continent fixture should exist");

    let worker = create_worker(&test, &["en"]);
    worker.pool.start().await;
    assert!(worker.pool.is_running().await);

    worker
        .queue
        .push(IndexJob::ReindexPlace {
            place_id: europe.id,
            cascade: false,
        })
        .expect("Failed to push job");

    let autocomplete_repo = AutocompleteRepository::new(&test.db);
    let mut row = None;
    for _ in 0..50 {
        row = autocomplete_repo
            .find("en", europe.id)
            .await
            .expect("Failed to read row");
        if row.is_some() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    assert_eq!(row.map(|r| r.name), Some("Europe".to_string()));

    worker.pool.stop().await;
    assert!(!worker.pool.is_running().await);
}

/// Tests that starting twice keeps a single dispatcher and stopping twice is harmless.
///
/// Expected: is_running() follows the first start and the first stop
#[tokio::test]
async fn start_and_stop_are_idempotent() {
    let test = test_setup_with_place_tables!("en").expect("Failed to create test setup");
    let worker = create_worker(&test, &["en"]);

    worker.pool.start().await;
    worker.pool.start().await;
    assert!(worker.pool.is_running().await);

    worker.pool.stop().await;
    worker.pool.stop().await;
    assert!(!worker.pool.is_running().await);
}

/// Tests that draining while the dispatcher runs returns immediately and leaves the queue to
/// the dispatcher.
///
/// Expected: drain() processes nothing, the queued job is still applied by the dispatcher
#[tokio::test]
async fn drain_is_skipped_while_running() {
    let test = test_setup_with_place_tables!("en").expect("Failed to create test setup");
    let europe = test
        .places()
        .insert_continent("EU", "Europe")
        .await
        .expect("Failed to insert continent");

    let worker = create_worker(&test, &["en"]);
    worker.pool.start().await;

    let drained = tokio::time::timeout(Duration::from_secs(1), worker.pool.drain())
        .await
        .expect("drain() should not wait for the dispatcher");
    assert_eq!(drained, 0);

    worker
        .queue
        .push(IndexJob::ReindexPlace {
            place_id: europe.id,
            cascade: false,
        })
        .expect("Failed to push job");

    let autocomplete_repo = AutocompleteRepository::new(&test.db);
    let mut row = None;
    for _ in 0..50 {
        row = autocomplete_repo
            .find("en", europe.id)
            .await
            .expect("Failed to read row");
        if row.is_some() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert!(row.is_some());

    worker.pool.stop().await;
}
