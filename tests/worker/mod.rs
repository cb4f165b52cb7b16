//! End-to-end tests for the save path: a store mutation commits, enqueues an index job, and
//! the index worker applies it to the autocomplete tables.

use placetree::{
    config::IndexerConfig,
    worker::{IndexJobHandler, Worker},
};
use placetree_test_utils::prelude::*;

mod drain;
mod lifecycle;

fn create_worker(test: &TestSetup, languages: &[&str]) -> Worker {
    let config = IndexerConfig {
        languages: languages.iter().map(|l| l.to_string()).collect(),
        rebuild_page_size: 10,
        batch_size: 10,
    };

    Worker::new(IndexJobHandler::new(test.db.clone(), config))
}
