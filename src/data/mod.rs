//! Data access layer repositories.
//!
//! Place and alternative-name repositories are generic over the connection so they can run
//! inside a transaction. The autocomplete repository addresses the per-language index tables,
//! which have no entity of their own.

pub mod alternative_name;
pub mod autocomplete;
pub mod place;

#[cfg(test)]
mod tests;
