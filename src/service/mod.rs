//! Hierarchy and indexing services.
//!
//! [`store::PlaceStore`] is the only write path. The remaining services read the store:
//! resolving parent chains, translating names, finding dependent places, and projecting all
//! of it into the autocomplete tables.

pub mod hierarchy;
pub mod indexer;
pub mod store;
pub mod subordinate;
pub mod translate;

#[cfg(test)]
mod tests;
