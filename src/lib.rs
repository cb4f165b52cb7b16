//! Geographic place hierarchy with multilingual names and a denormalized, per-language
//! autocomplete index.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod worker;
