use entity::place::PlaceKind;
use thiserror::Error;

/// Errors raised by the place store save paths.
///
/// None of these are retried, they are returned to the caller as-is.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Place ID {0} not found")]
    PlaceNotFound(i32),
    #[error("Alternative name ID {0} not found")]
    AlternativeNameNotFound(i32),
    /// A place's subtype is fixed at creation.
    #[error(
        "Place ID {place_id} is a {} and cannot be changed into a {}",
        .current.label(),
        .requested.label()
    )]
    SubtypeChange {
        place_id: i32,
        current: PlaceKind,
        requested: PlaceKind,
    },
    /// Parent reference points at a missing row or a row of the wrong subtype.
    #[error("A {} cannot use {parent} as its parent: {reason}", .kind.label())]
    InvalidParent {
        kind: PlaceKind,
        parent: String,
        reason: String,
    },
}
