use std::collections::HashSet;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

use crate::{
    data::place::PlaceRepository,
    error::{hierarchy::HierarchyError, Error},
    model::place::{ParentRef, Place, PlaceKind},
};

/// Longest parent chain a place may have, counted in hops from the place to its root.
pub const MAX_HOPS: usize = 5;

pub struct HierarchyResolver<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HierarchyResolver<'a> {
    /// Creates a new instance of [`HierarchyResolver`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Walks the parent edges of a place and returns the chain root first, ending with the
    /// place itself.
    ///
    /// # Returns
    /// - `Ok(Vec<Place>)`: Complete chain, never partial
    /// - `Err(Error::HierarchyError)`: Missing parent, parent of the wrong kind, a repeated
    ///   place, or more than [`MAX_HOPS`] hops
    /// - `Err(Error::DbErr)`: Database error
    pub async fn resolve(&self, place: &Place) -> Result<Vec<Place>, Error> {
        let place_repo = PlaceRepository::new(self.db);

        let mut chain = vec![place.clone()];
        let mut visited = HashSet::from([place.id]);

        loop {
            let current = &chain[chain.len() - 1];

            let parent = match current.parent() {
                ParentRef::Root => break,
                ParentRef::ContinentCode(code) => place_repo
                    .find_continent_by_code(code)
                    .await?
                    .ok_or_else(|| HierarchyError::BrokenHierarchy {
                        place_id: place.id,
                        reason: format!(
                            "no continent with code '{}' for country ID {}",
                            code, current.id
                        ),
                    })?,
                ParentRef::Place { id, kind } => {
                    let parent = load_place(&place_repo, id).await?.ok_or_else(|| {
                        HierarchyError::BrokenHierarchy {
                            place_id: place.id,
                            reason: format!(
                                "parent ID {} of {} ID {} does not exist",
                                id,
                                current.kind().label(),
                                current.id
                            ),
                        }
                    })?;

                    if parent.kind() != kind {
                        return Err(HierarchyError::BrokenHierarchy {
                            place_id: place.id,
                            reason: format!(
                                "parent ID {} of {} ID {} is a {}, expected a {}",
                                id,
                                current.kind().label(),
                                current.id,
                                parent.kind().label(),
                                kind.label()
                            ),
                        }
                        .into());
                    }

                    parent
                }
            };

            // Neither check below can trip while parent kinds strictly ascend. They guard
            // against store corruption the kind checks can't express.
            if !visited.insert(parent.id) {
                return Err(HierarchyError::CycleDetected {
                    place_id: place.id,
                    repeated_id: parent.id,
                }
                .into());
            }

            if chain.len() > MAX_HOPS {
                return Err(HierarchyError::TooDeep {
                    place_id: place.id,
                    max_hops: MAX_HOPS,
                }
                .into());
            }

            chain.push(parent);
        }

        chain.reverse();

        Ok(chain)
    }

    /// Dotted administrative code of a region (`FR.11`) or subregion (`FR.11.75`).
    ///
    /// Returns `None` for every other kind of place.
    pub async fn full_code(&self, place: &Place) -> Result<Option<String>, Error> {
        if !matches!(place.kind(), PlaceKind::Region | PlaceKind::Subregion) {
            return Ok(None);
        }

        let chain = self.resolve(place).await?;

        Ok(Some(dotted_code(&chain)))
    }
}

/// Reads a place, reporting a place row without its subtype row as
/// [`HierarchyError::MissingDetails`] rather than a database error.
pub async fn load_place<C: ConnectionTrait>(
    place_repo: &PlaceRepository<'_, C>,
    place_id: i32,
) -> Result<Option<Place>, Error> {
    match place_repo.get(place_id).await {
        Err(DbErr::RecordNotFound(_)) => match place_repo.get_kind(place_id).await? {
            Some(kind) => Err(HierarchyError::MissingDetails { place_id, kind }.into()),
            None => Ok(None),
        },
        result => Ok(result?),
    }
}

fn dotted_code(chain: &[Place]) -> String {
    chain
        .iter()
        .filter(|p| {
            matches!(
                p.kind(),
                PlaceKind::Country | PlaceKind::Region | PlaceKind::Subregion
            )
        })
        .filter_map(|p| p.details.code())
        .collect::<Vec<_>>()
        .join(".")
}
