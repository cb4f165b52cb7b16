//! Test fixture modules for database record creation.
//!
//! - `place` - Places of every subtype and their alternative names

pub mod place;
