//! Tests for processing queued index jobs on demand with `IndexWorker::drain`.

use placetree::{
    data::autocomplete::AutocompleteRepository, model::worker::IndexJob,
    service::store::PlaceStore,
};

use super::*;

/// Tests that a renamed country reaches its city's rows once the queue is drained.
///
/// Expected: nothing changes before the drain, both languages carry the new name after
#[tokio::test]
async fn drained_rename_updates_subordinate_rows() {
    let test = test_setup_with_place_tables!("en", "pt").expect("Failed to create test setup");
    let europe = test
        .places()
        .insert_continent("EU", "Europe")
        .await
        .expect("Failed to insert continent");
    let france = test
        .places()
        .insert_country("EU", "FR", "France")
        .await
        .expect("Failed to insert country");
    let region = test
        .places()
        .insert_region(france.id, "11", "Ile de France")
        .await
        .expect("Failed to insert region");
    let paris = test
        .places()
        .insert_city(france.id, Some(region.id), "Paris")
        .await
        .expect("Failed to insert city");
    test.places()
        .insert_alternative_name(europe.id, "Europa", "pt", false)
        .await
        .expect("Failed to insert alternative name");

    let worker = create_worker(&test, &["en", "pt"]);
    worker.queue.push(IndexJob::Rebuild).expect("Failed to push job");
    assert_eq!(worker.pool.drain().await, 1);

    let store = PlaceStore::new(&test.db, &worker.queue);
    let mut country = store.get_place(france.id).await.expect("Failed to get place");
    country.name = "Francia".to_string();
    country.slug = "francia".to_string();
    store
        .update_place(country, false)
        .await
        .expect("Failed to update place");

    let autocomplete_repo = AutocompleteRepository::new(&test.db);
    let stale = autocomplete_repo
        .find("en", paris.id)
        .await
        .expect("Failed to read row")
        .expect("Row should exist after rebuild");
    assert_eq!(stale.name, "Europe, France, Ile de France, Paris");

    assert_eq!(worker.pool.drain().await, 1);

    let en = autocomplete_repo
        .find("en", paris.id)
        .await
        .expect("Failed to read row")
        .expect("Row should exist");
    let pt = autocomplete_repo
        .find("pt", paris.id)
        .await
        .expect("Failed to read row")
        .expect("Row should exist");
    assert_eq!(en.name, "Europe, Francia, Ile de France, Paris");
    assert_eq!(pt.name, "Europa, Francia, Ile de France, Paris");
    assert_eq!(en.slug, "europe/francia/ile-de-france/paris");
}

/// Tests that a failing job is logged and doesn't stop the jobs queued after it.
///
/// Expected: both jobs are consumed and the valid one is applied
#[tokio::test]
async fn failed_job_does_not_block_queue() {
    let test = test_setup_with_place_tables!("en").expect("Failed to create test setup");
    let europe = test
        .places()
        .insert_continent("EU", "Europe")
        .await
        .expect("Failed to insert continent");

    let worker = create_worker(&test, &["en"]);
    worker
        .queue
        .push(IndexJob::ReindexPlace {
            place_id: 9_999,
            cascade: false,
        })
        .expect("Failed to push job");
    worker
        .queue
        .push(IndexJob::ReindexPlace {
            place_id: europe.id,
            cascade: true,
        })
        .expect("Failed to push job");

    assert_eq!(worker.pool.drain().await, 2);

    let row = AutocompleteRepository::new(&test.db)
        .find("en", europe.id)
        .await
        .expect("Failed to read row");
    assert!(row.is_some());
}

/// Tests that draining an empty queue does nothing.
///
/// Expected: zero jobs processed
#[tokio::test]
async fn drain_on_empty_queue() {
    let test = test_setup_with_place_tables!("en").expect("Failed to create test setup");
    let worker = create_worker(&test, &["en"]);

    assert_eq!(worker.pool.drain().await, 0);
}
