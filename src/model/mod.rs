//! Domain models shared by the data, service and worker layers.

pub mod alternative_name;
pub mod autocomplete;
pub mod place;
pub mod worker;
