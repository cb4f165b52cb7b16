//! Database entities for the place hierarchy.
//!
//! Every place has one row in [`place`] carrying the shared columns and an explicit
//! [`place::PlaceKind`] discriminant, plus exactly one row in the subtype table matching
//! that discriminant. Per-language autocomplete tables are not modelled as entities since
//! their names are only known at runtime, see [`autocomplete`].

pub mod prelude;

pub mod alternative_name;
pub mod autocomplete;
pub mod city;
pub mod continent;
pub mod country;
pub mod country_neighbour;
pub mod district;
pub mod place;
pub mod place_alternative_name;
pub mod postal_code;
pub mod region;
pub mod subregion;
