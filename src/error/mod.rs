//! Error types for the place hierarchy engine.
//!
//! Each domain gets its own `thiserror` enum (configuration, place store, hierarchy
//! resolution, index worker) and [`Error`] aggregates them together with database errors so
//! services can use `?` across layers.

pub mod config;
pub mod hierarchy;
pub mod store;
pub mod worker;

use thiserror::Error;

use crate::error::{
    config::ConfigError, hierarchy::HierarchyError, store::StoreError, worker::WorkerError,
};

/// Main error type for placetree.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Store errors (missing records, rejected mutations)
/// - Hierarchy errors (malformed parent chains, surfaced as data-integrity errors)
/// - Worker errors (index job queue unavailable)
/// - Database errors
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Place store error (not found, subtype change, invalid parent).
    #[error(transparent)]
    StoreError(#[from] StoreError),
    /// Malformed parent chain detected while resolving a hierarchy.
    #[error(transparent)]
    HierarchyError(#[from] HierarchyError),
    /// Index job queue error.
    #[error(transparent)]
    WorkerError(#[from] WorkerError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl Error {
    /// Whether the error is a data-integrity problem in the stored hierarchy rather than an
    /// infrastructure failure.
    pub fn is_integrity_error(&self) -> bool {
        matches!(self, Error::HierarchyError(_))
    }
}
