use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    data::{alternative_name::AlternativeNameRepository, place::PlaceRepository},
    error::{store::StoreError, Error},
    model::{
        alternative_name::{AlternativeName, NewAlternativeName},
        place::{NewPlace, ParentRef, Place, PlaceDetails, PlaceKind},
        worker::IndexJob,
    },
    service::{hierarchy::HierarchyResolver, indexer::needs_cascade},
    worker::IndexQueue,
};

/// Save paths for places and alternative names.
///
/// Every mutation commits in its own transaction and then enqueues the index job that
/// refreshes the affected autocomplete rows. A job that can't be enqueued is logged; the
/// committed change is still returned.
pub struct PlaceStore<'a> {
    db: &'a DatabaseConnection,
    queue: &'a IndexQueue,
}

impl<'a> PlaceStore<'a> {
    /// Creates a new instance of [`PlaceStore`]
    pub fn new(db: &'a DatabaseConnection, queue: &'a IndexQueue) -> Self {
        Self { db, queue }
    }

    /// Persists a new place and its subtype row.
    ///
    /// # Returns
    /// - `Ok(Place)`: The created place
    /// - `Err(Error::StoreError(StoreError::InvalidParent))`: Parent reference is missing or
    ///   of the wrong kind
    /// - `Err(Error::DbErr)`: Database error
    pub async fn create_place(&self, place: NewPlace) -> Result<Place, Error> {
        let txn = self.db.begin().await?;

        validate_parent(&txn, &place.details).await?;
        let place = PlaceRepository::new(&txn).create(place).await?;

        txn.commit().await?;

        tracing::debug!("Created {} ID {}", place.kind().label(), place.id);
        self.enqueue(IndexJob::ReindexPlace {
            place_id: place.id,
            cascade: false,
        });

        Ok(place)
    }

    pub async fn get_place(&self, place_id: i32) -> Result<Place, Error> {
        PlaceRepository::new(self.db)
            .get(place_id)
            .await?
            .ok_or_else(|| StoreError::PlaceNotFound(place_id).into())
    }

    /// Saves an edited place. The `geonames` flag is always cleared.
    ///
    /// Subordinates are refreshed when `cascade` is set or when the name, slug or parent
    /// of the place changed.
    ///
    /// # Returns
    /// - `Ok(Place)`: The saved place
    /// - `Err(Error::StoreError(StoreError::PlaceNotFound))`: No place with this ID
    /// - `Err(Error::StoreError(StoreError::SubtypeChange))`: Details are of another subtype
    /// - `Err(Error::StoreError(StoreError::InvalidParent))`: Parent reference is invalid
    pub async fn update_place(&self, mut place: Place, cascade: bool) -> Result<Place, Error> {
        let txn = self.db.begin().await?;
        let place_repo = PlaceRepository::new(&txn);

        let previous = place_repo
            .get(place.id)
            .await?
            .ok_or(StoreError::PlaceNotFound(place.id))?;

        if previous.kind() != place.kind() {
            return Err(StoreError::SubtypeChange {
                place_id: place.id,
                current: previous.kind(),
                requested: place.kind(),
            }
            .into());
        }

        validate_parent(&txn, &place.details).await?;

        place.geonames = false;
        let place = place_repo.update(&place).await?;

        txn.commit().await?;

        let cascade = needs_cascade(&previous, &place, cascade);
        tracing::debug!(
            "Updated {} ID {} (cascade: {})",
            place.kind().label(),
            place.id,
            cascade
        );
        self.enqueue(IndexJob::ReindexPlace {
            place_id: place.id,
            cascade,
        });

        Ok(place)
    }

    /// Flags a place as deleted. Its rows stay in the store and in the index.
    pub async fn soft_delete_place(&self, place_id: i32) -> Result<Place, Error> {
        let mut place = self.get_place(place_id).await?;
        place.deleted = true;

        self.update_place(place, false).await
    }

    /// Places ordered by name, soft-deleted ones only when `include_deleted` is set.
    pub async fn list_places(
        &self,
        include_deleted: bool,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Place>, Error> {
        Ok(PlaceRepository::new(self.db)
            .list(include_deleted, offset, limit)
            .await?)
    }

    pub async fn cities_by_region(&self, region_id: i32) -> Result<Vec<Place>, Error> {
        Ok(PlaceRepository::new(self.db)
            .cities_by_region(region_id)
            .await?)
    }

    pub async fn cities_by_country(&self, country_id: i32) -> Result<Vec<Place>, Error> {
        Ok(PlaceRepository::new(self.db)
            .cities_by_country(country_id)
            .await?)
    }

    pub async fn regions_by_country(&self, country_id: i32) -> Result<Vec<Place>, Error> {
        Ok(PlaceRepository::new(self.db)
            .regions_by_country(country_id)
            .await?)
    }

    pub async fn countries_by_continent(&self, continent_code: &str) -> Result<Vec<Place>, Error> {
        Ok(PlaceRepository::new(self.db)
            .countries_by_continent(continent_code)
            .await?)
    }

    pub async fn subregions_by_region(&self, region_id: i32) -> Result<Vec<Place>, Error> {
        Ok(PlaceRepository::new(self.db)
            .subregions_by_region(region_id)
            .await?)
    }

    pub async fn districts_by_city(&self, city_id: i32) -> Result<Vec<Place>, Error> {
        Ok(PlaceRepository::new(self.db)
            .districts_by_city(city_id)
            .await?)
    }

    pub async fn postal_codes_by_country(&self, country_id: i32) -> Result<Vec<Place>, Error> {
        Ok(PlaceRepository::new(self.db)
            .postal_codes_by_country(country_id)
            .await?)
    }

    /// Dotted administrative code of a region or subregion, `None` for other kinds.
    pub async fn full_code(&self, place_id: i32) -> Result<Option<String>, Error> {
        let place = self.get_place(place_id).await?;

        HierarchyResolver::new(self.db).full_code(&place).await
    }

    /// Persists a new alternative name. Nothing is reindexed until it is associated.
    pub async fn create_alternative_name(
        &self,
        name: NewAlternativeName,
    ) -> Result<AlternativeName, Error> {
        Ok(AlternativeNameRepository::new(self.db).create(name).await?)
    }

    pub async fn get_alternative_name(&self, id: i32) -> Result<AlternativeName, Error> {
        AlternativeNameRepository::new(self.db)
            .get(id)
            .await?
            .ok_or_else(|| StoreError::AlternativeNameNotFound(id).into())
    }

    pub async fn alternative_names_for_place(
        &self,
        place_id: i32,
    ) -> Result<Vec<AlternativeName>, Error> {
        Ok(AlternativeNameRepository::new(self.db)
            .find_for_place(place_id)
            .await?)
    }

    /// Saves an edited alternative name. The `geonames` flag is always cleared.
    ///
    /// When a field that can change a translation differs, every owning place is refreshed
    /// with cascade.
    pub async fn update_alternative_name(
        &self,
        mut name: AlternativeName,
    ) -> Result<AlternativeName, Error> {
        let txn = self.db.begin().await?;
        let alternative_name_repo = AlternativeNameRepository::new(&txn);

        let previous = alternative_name_repo
            .get(name.id)
            .await?
            .ok_or(StoreError::AlternativeNameNotFound(name.id))?;

        name.geonames = false;
        let name = alternative_name_repo.update(&name).await?;

        txn.commit().await?;

        if previous.display_changed(&name) {
            self.enqueue(IndexJob::ReindexAlternativeNameOwners {
                alternative_name_id: name.id,
            });
        }

        Ok(name)
    }

    /// Attaches an alternative name to a place and refreshes the place with cascade.
    pub async fn associate(&self, place_id: i32, alternative_name_id: i32) -> Result<(), Error> {
        self.ensure_link_targets(place_id, alternative_name_id).await?;

        AlternativeNameRepository::new(self.db)
            .associate(place_id, alternative_name_id)
            .await?;

        self.enqueue(IndexJob::ReindexPlace {
            place_id,
            cascade: true,
        });

        Ok(())
    }

    /// Detaches an alternative name from a place, refreshing the place if a link was removed.
    pub async fn disassociate(
        &self,
        place_id: i32,
        alternative_name_id: i32,
    ) -> Result<(), Error> {
        self.ensure_link_targets(place_id, alternative_name_id).await?;

        let removed = AlternativeNameRepository::new(self.db)
            .disassociate(place_id, alternative_name_id)
            .await?;

        if removed {
            self.enqueue(IndexJob::ReindexPlace {
                place_id,
                cascade: true,
            });
        }

        Ok(())
    }

    async fn ensure_link_targets(
        &self,
        place_id: i32,
        alternative_name_id: i32,
    ) -> Result<(), Error> {
        let place_kind = PlaceRepository::new(self.db).get_kind(place_id).await?;
        if place_kind.is_none() {
            return Err(StoreError::PlaceNotFound(place_id).into());
        }

        self.get_alternative_name(alternative_name_id).await?;

        Ok(())
    }

    fn enqueue(&self, job: IndexJob) {
        if let Err(e) = self.queue.push(job) {
            tracing::error!("Failed to enqueue index job: {}", e);
        }
    }
}

/// Checks that the parent references of a subtype point at existing places of the right kind.
async fn validate_parent<C: ConnectionTrait>(
    db: &C,
    details: &PlaceDetails,
) -> Result<(), Error> {
    let place_repo = PlaceRepository::new(db);
    let kind = details.kind();

    match details.parent() {
        ParentRef::Root => {}
        ParentRef::ContinentCode(code) => {
            if place_repo.find_continent_by_code(code).await?.is_none() {
                return Err(StoreError::InvalidParent {
                    kind,
                    parent: format!("continent code '{}'", code),
                    reason: "no continent has this code".to_string(),
                }
                .into());
            }
        }
        ParentRef::Place { id, kind: expected } => {
            expect_kind(db, kind, id, expected).await?;
        }
    }

    if let PlaceDetails::City(city) = details {
        if let Some(subregion_id) = city.subregion_id {
            expect_kind(db, kind, subregion_id, PlaceKind::Subregion).await?;
        }
    }

    Ok(())
}

async fn expect_kind<C: ConnectionTrait>(
    db: &C,
    kind: PlaceKind,
    parent_id: i32,
    expected: PlaceKind,
) -> Result<(), Error> {
    let reason = match PlaceRepository::new(db).get_kind(parent_id).await? {
        Some(found) if found == expected => return Ok(()),
        Some(found) => format!(
            "expected a {}, found a {}",
            expected.label(),
            found.label()
        ),
        None => "place does not exist".to_string(),
    };

    Err(StoreError::InvalidParent {
        kind,
        parent: format!("place ID {}", parent_id),
        reason,
    }
    .into())
}
