use entity::place::PlaceKind;
use thiserror::Error;

/// Data-integrity errors found while walking a place's parent chain.
///
/// Resolution aborts on any of these instead of returning a partial chain.
#[derive(Error, Debug, PartialEq)]
pub enum HierarchyError {
    #[error("Broken hierarchy for place ID {place_id}: {reason}")]
    BrokenHierarchy { place_id: i32, reason: String },
    #[error("Cycle detected resolving place ID {place_id}: place ID {repeated_id} was visited twice")]
    CycleDetected { place_id: i32, repeated_id: i32 },
    #[error("Hierarchy of place ID {place_id} exceeds the maximum of {max_hops} parent hops")]
    TooDeep { place_id: i32, max_hops: usize },
    /// The shared place row exists but the row of its subtype doesn't.
    #[error("Place ID {place_id} is a {} without a {} row", .kind.label(), .kind.label())]
    MissingDetails { place_id: i32, kind: PlaceKind },
}
