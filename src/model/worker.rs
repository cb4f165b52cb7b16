//! Index job definitions.
//!
//! Jobs are enqueued by the place store after a mutation commits and are processed by the
//! index worker, making the window between a committed change and its index refresh an
//! explicit queue state.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum IndexJob {
    /// Refresh a place's own rows, and its subordinates' rows when `cascade` is set.
    ReindexPlace {
        place_id: i32,
        cascade: bool,
    },

    /// Refresh every place owning an alternative name, cascading to their subordinates
    /// since descendants embed the owners' translated names.
    ReindexAlternativeNameOwners {
        alternative_name_id: i32,
    },

    /// Rebuild every autocomplete row from scratch.
    Rebuild,
}

impl fmt::Display for IndexJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexJob::ReindexPlace { place_id, cascade } => {
                write!(f, "ReindexPlace(place_id: {}, cascade: {})", place_id, cascade)
            }
            IndexJob::ReindexAlternativeNameOwners {
                alternative_name_id,
            } => write!(
                f,
                "ReindexAlternativeNameOwners(alternative_name_id: {})",
                alternative_name_id
            ),
            IndexJob::Rebuild => write!(f, "Rebuild"),
        }
    }
}
