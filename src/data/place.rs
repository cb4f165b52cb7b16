use std::collections::HashMap;

use chrono::Utc;
use entity::place::PlaceKind;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::place::{
    CityDetails, ContinentDetails, CountryDetails, DistrictDetails, NewPlace, Place, PlaceDetails,
    PostalCodeDetails, RegionDetails, SubregionDetails,
};

/// Upper bound on IDs passed to a single `IN (...)` filter.
const ID_CHUNK_SIZE: usize = 500;

/// One keyset page of the place table.
#[derive(Debug, Default)]
pub struct PlacePage {
    pub places: Vec<Place>,
    /// Place rows whose subtype row is missing, with their discriminant.
    pub incomplete: Vec<(i32, PlaceKind)>,
    /// Highest place ID read, complete or not. `None` once the table is exhausted.
    pub last_id: Option<i32>,
}

pub struct PlaceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlaceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the shared place row followed by its subtype row.
    ///
    /// # Notes
    /// - Pass a transaction as the connection so both rows are committed together
    pub async fn create(&self, place: NewPlace) -> Result<Place, DbErr> {
        let model = entity::place::ActiveModel {
            kind: ActiveValue::Set(place.details.kind()),
            name: ActiveValue::Set(place.name),
            slug: ActiveValue::Set(place.slug),
            ranking: ActiveValue::Set(place.ranking),
            active: ActiveValue::Set(place.active),
            deleted: ActiveValue::Set(false),
            geonames: ActiveValue::Set(place.geonames),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.insert_details(model.id, &place.details).await?;

        Ok(assemble(model, place.details))
    }

    /// Overwrites the shared and subtype columns of an existing place.
    ///
    /// The subtype itself is never changed here; callers must reject subtype changes first.
    pub async fn update(&self, place: &Place) -> Result<Place, DbErr> {
        let model = entity::place::ActiveModel {
            id: ActiveValue::Unchanged(place.id),
            kind: ActiveValue::Unchanged(place.kind()),
            name: ActiveValue::Set(place.name.clone()),
            slug: ActiveValue::Set(place.slug.clone()),
            ranking: ActiveValue::Set(place.ranking),
            active: ActiveValue::Set(place.active),
            deleted: ActiveValue::Set(place.deleted),
            geonames: ActiveValue::Set(place.geonames),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        }
        .update(self.db)
        .await?;

        self.update_details(place.id, &place.details).await?;

        Ok(assemble(model, place.details.clone()))
    }

    /// A place row without its subtype row is reported as [`DbErr::RecordNotFound`].
    pub async fn get(&self, place_id: i32) -> Result<Option<Place>, DbErr> {
        let Some(model) = entity::prelude::Place::find_by_id(place_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.load(vec![model]).await?.pop())
    }

    /// Returns the kind of a place without loading its subtype row.
    pub async fn get_kind(&self, place_id: i32) -> Result<Option<PlaceKind>, DbErr> {
        entity::prelude::Place::find_by_id(place_id)
            .select_only()
            .column(entity::place::Column::Kind)
            .into_tuple::<PlaceKind>()
            .one(self.db)
            .await
    }

    /// Loads places by ID ordered by ID. IDs that don't exist are skipped.
    pub async fn get_many(&self, place_ids: &[i32]) -> Result<Vec<Place>, DbErr> {
        let mut places = Vec::with_capacity(place_ids.len());

        for chunk in place_ids.chunks(ID_CHUNK_SIZE) {
            let models = entity::prelude::Place::find()
                .filter(entity::place::Column::Id.is_in(chunk.iter().copied()))
                .all(self.db)
                .await?;

            places.extend(self.load(models).await?);
        }

        places.sort_by_key(|p| p.id);
        places.dedup_by_key(|p| p.id);

        Ok(places)
    }

    /// Keyset page of places ordered by ID, starting after `after_id`.
    ///
    /// Unlike the other reads, place rows missing their subtype row don't fail the page;
    /// they are listed in [`PlacePage::incomplete`].
    pub async fn page(&self, after_id: i32, limit: u64) -> Result<PlacePage, DbErr> {
        let models = entity::prelude::Place::find()
            .filter(entity::place::Column::Id.gt(after_id))
            .order_by_asc(entity::place::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        let last_id = models.last().map(|m| m.id);
        let (places, incomplete) = self.load_partial(models).await?;

        Ok(PlacePage {
            places,
            incomplete,
            last_id,
        })
    }

    /// Places ordered by name, optionally hiding soft-deleted ones.
    pub async fn list(
        &self,
        include_deleted: bool,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Place>, DbErr> {
        let mut query = entity::prelude::Place::find();
        if !include_deleted {
            query = query.filter(entity::place::Column::Deleted.eq(false));
        }

        let models = query
            .order_by_asc(entity::place::Column::Name)
            .order_by_asc(entity::place::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await?;

        self.load(models).await
    }

    /// First continent with the given code, by lowest ID.
    pub async fn find_continent_by_code(&self, code: &str) -> Result<Option<Place>, DbErr> {
        let place_id = entity::prelude::Continent::find()
            .select_only()
            .column(entity::continent::Column::PlaceId)
            .filter(entity::continent::Column::Code.eq(code))
            .order_by_asc(entity::continent::Column::PlaceId)
            .into_tuple::<i32>()
            .one(self.db)
            .await?;

        match place_id {
            Some(place_id) => self.get(place_id).await,
            None => Ok(None),
        }
    }

    pub async fn countries_by_continent(&self, continent_code: &str) -> Result<Vec<Place>, DbErr> {
        let ids = entity::prelude::Country::find()
            .select_only()
            .column(entity::country::Column::PlaceId)
            .filter(entity::country::Column::Continent.eq(continent_code))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        self.get_many(&ids).await
    }

    pub async fn regions_by_country(&self, country_id: i32) -> Result<Vec<Place>, DbErr> {
        let ids = entity::prelude::Region::find()
            .select_only()
            .column(entity::region::Column::PlaceId)
            .filter(entity::region::Column::CountryId.eq(country_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        self.get_many(&ids).await
    }

    pub async fn subregions_by_region(&self, region_id: i32) -> Result<Vec<Place>, DbErr> {
        let ids = entity::prelude::Subregion::find()
            .select_only()
            .column(entity::subregion::Column::PlaceId)
            .filter(entity::subregion::Column::RegionId.eq(region_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        self.get_many(&ids).await
    }

    pub async fn cities_by_region(&self, region_id: i32) -> Result<Vec<Place>, DbErr> {
        let ids = entity::prelude::City::find()
            .select_only()
            .column(entity::city::Column::PlaceId)
            .filter(entity::city::Column::RegionId.eq(region_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        self.get_many(&ids).await
    }

    pub async fn cities_by_country(&self, country_id: i32) -> Result<Vec<Place>, DbErr> {
        let ids = entity::prelude::City::find()
            .select_only()
            .column(entity::city::Column::PlaceId)
            .filter(entity::city::Column::CountryId.eq(country_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        self.get_many(&ids).await
    }

    pub async fn districts_by_city(&self, city_id: i32) -> Result<Vec<Place>, DbErr> {
        let ids = entity::prelude::District::find()
            .select_only()
            .column(entity::district::Column::PlaceId)
            .filter(entity::district::Column::CityId.eq(city_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        self.get_many(&ids).await
    }

    pub async fn postal_codes_by_country(&self, country_id: i32) -> Result<Vec<Place>, DbErr> {
        let ids = entity::prelude::PostalCode::find()
            .select_only()
            .column(entity::postal_code::Column::PlaceId)
            .filter(entity::postal_code::Column::CountryId.eq(country_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        self.get_many(&ids).await
    }

    /// Attaches subtype details to place rows, issuing one query per subtype present.
    ///
    /// A place row without its subtype row is reported as [`DbErr::RecordNotFound`].
    async fn load(&self, models: Vec<entity::place::Model>) -> Result<Vec<Place>, DbErr> {
        let (places, incomplete) = self.load_partial(models).await?;

        match incomplete.first() {
            Some((place_id, kind)) => Err(DbErr::RecordNotFound(format!(
                "{} row for place ID {}",
                kind.label(),
                place_id
            ))),
            None => Ok(places),
        }
    }

    /// Splits place rows into assembled places and rows missing their subtype row.
    async fn load_partial(
        &self,
        models: Vec<entity::place::Model>,
    ) -> Result<(Vec<Place>, Vec<(i32, PlaceKind)>), DbErr> {
        let mut ids_by_kind: HashMap<PlaceKind, Vec<i32>> = HashMap::new();
        for model in &models {
            ids_by_kind.entry(model.kind).or_default().push(model.id);
        }

        let mut details: HashMap<i32, PlaceDetails> = HashMap::with_capacity(models.len());
        for (kind, ids) in ids_by_kind {
            details.extend(self.details_by_kind(kind, &ids).await?);
        }

        let mut places = Vec::with_capacity(models.len());
        let mut incomplete = Vec::new();
        for model in models {
            match details.remove(&model.id) {
                Some(d) => places.push(assemble(model, d)),
                None => incomplete.push((model.id, model.kind)),
            }
        }

        Ok((places, incomplete))
    }

    async fn details_by_kind(
        &self,
        kind: PlaceKind,
        ids: &[i32],
    ) -> Result<HashMap<i32, PlaceDetails>, DbErr> {
        let ids = ids.iter().copied();

        let details = match kind {
            PlaceKind::Continent => entity::prelude::Continent::find()
                .filter(entity::continent::Column::PlaceId.is_in(ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|r| (r.place_id, PlaceDetails::Continent(ContinentDetails { code: r.code })))
                .collect(),
            PlaceKind::Country => {
                let rows = entity::prelude::Country::find()
                    .filter(entity::country::Column::PlaceId.is_in(ids))
                    .all(self.db)
                    .await?;
                let mut neighbours = self
                    .neighbours(&rows.iter().map(|r| r.place_id).collect::<Vec<_>>())
                    .await?;

                rows.into_iter()
                    .map(|r| {
                        let n = neighbours.remove(&r.place_id).unwrap_or_default();
                        (r.place_id, PlaceDetails::Country(country_details(r, n)))
                    })
                    .collect()
            }
            PlaceKind::Region => entity::prelude::Region::find()
                .filter(entity::region::Column::PlaceId.is_in(ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|r| {
                    (
                        r.place_id,
                        PlaceDetails::Region(RegionDetails {
                            name_std: r.name_std,
                            code: r.code,
                            country_id: r.country_id,
                        }),
                    )
                })
                .collect(),
            PlaceKind::Subregion => entity::prelude::Subregion::find()
                .filter(entity::subregion::Column::PlaceId.is_in(ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|r| {
                    (
                        r.place_id,
                        PlaceDetails::Subregion(SubregionDetails {
                            name_std: r.name_std,
                            code: r.code,
                            region_id: r.region_id,
                        }),
                    )
                })
                .collect(),
            PlaceKind::City => entity::prelude::City::find()
                .filter(entity::city::Column::PlaceId.is_in(ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|r| {
                    (
                        r.place_id,
                        PlaceDetails::City(CityDetails {
                            name_std: r.name_std,
                            latitude: r.latitude,
                            longitude: r.longitude,
                            population: r.population,
                            region_id: r.region_id,
                            subregion_id: r.subregion_id,
                            country_id: r.country_id,
                            elevation: r.elevation,
                            feature_code: r.feature_code,
                            timezone: r.timezone,
                        }),
                    )
                })
                .collect(),
            PlaceKind::District => entity::prelude::District::find()
                .filter(entity::district::Column::PlaceId.is_in(ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|r| {
                    (
                        r.place_id,
                        PlaceDetails::District(DistrictDetails {
                            name_std: r.name_std,
                            latitude: r.latitude,
                            longitude: r.longitude,
                            population: r.population,
                            city_id: r.city_id,
                        }),
                    )
                })
                .collect(),
            PlaceKind::PostalCode => entity::prelude::PostalCode::find()
                .filter(entity::postal_code::Column::PlaceId.is_in(ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|r| {
                    (
                        r.place_id,
                        PlaceDetails::PostalCode(PostalCodeDetails {
                            code: r.code,
                            latitude: r.latitude,
                            longitude: r.longitude,
                            country_id: r.country_id,
                            region_name: r.region_name,
                            subregion_name: r.subregion_name,
                            district_name: r.district_name,
                        }),
                    )
                })
                .collect(),
        };

        Ok(details)
    }

    async fn neighbours(&self, country_ids: &[i32]) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        if country_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let edges = entity::prelude::CountryNeighbour::find()
            .filter(entity::country_neighbour::Column::CountryId.is_in(country_ids.iter().copied()))
            .order_by_asc(entity::country_neighbour::Column::NeighbourId)
            .all(self.db)
            .await?;

        let mut neighbours: HashMap<i32, Vec<i32>> = HashMap::new();
        for edge in edges {
            neighbours
                .entry(edge.country_id)
                .or_default()
                .push(edge.neighbour_id);
        }

        Ok(neighbours)
    }

    /// Rewrites every edge touching a country in both directions, so the neighbour's list
    /// mirrors this one.
    async fn replace_neighbours(&self, country_id: i32, neighbours: &[i32]) -> Result<(), DbErr> {
        entity::prelude::CountryNeighbour::delete_many()
            .filter(
                Condition::any()
                    .add(entity::country_neighbour::Column::CountryId.eq(country_id))
                    .add(entity::country_neighbour::Column::NeighbourId.eq(country_id)),
            )
            .exec(self.db)
            .await?;

        let mut neighbours = neighbours.to_vec();
        neighbours.sort_unstable();
        neighbours.dedup();
        neighbours.retain(|id| *id != country_id);

        if neighbours.is_empty() {
            return Ok(());
        }

        let edges = neighbours.into_iter().flat_map(|neighbour_id| {
            [(country_id, neighbour_id), (neighbour_id, country_id)].map(|(from, to)| {
                entity::country_neighbour::ActiveModel {
                    country_id: ActiveValue::Set(from),
                    neighbour_id: ActiveValue::Set(to),
                }
            })
        });

        entity::prelude::CountryNeighbour::insert_many(edges)
            .on_conflict(
                OnConflict::columns([
                    entity::country_neighbour::Column::CountryId,
                    entity::country_neighbour::Column::NeighbourId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    async fn insert_details(&self, place_id: i32, details: &PlaceDetails) -> Result<(), DbErr> {
        match details {
            PlaceDetails::Continent(c) => {
                continent_model(place_id, c).insert(self.db).await?;
            }
            PlaceDetails::Country(c) => {
                country_model(place_id, c).insert(self.db).await?;
                self.replace_neighbours(place_id, &c.neighbours).await?;
            }
            PlaceDetails::Region(r) => {
                region_model(place_id, r).insert(self.db).await?;
            }
            PlaceDetails::Subregion(s) => {
                subregion_model(place_id, s).insert(self.db).await?;
            }
            PlaceDetails::City(c) => {
                city_model(place_id, c).insert(self.db).await?;
            }
            PlaceDetails::District(d) => {
                district_model(place_id, d).insert(self.db).await?;
            }
            PlaceDetails::PostalCode(p) => {
                postal_code_model(place_id, p).insert(self.db).await?;
            }
        }

        Ok(())
    }

    async fn update_details(&self, place_id: i32, details: &PlaceDetails) -> Result<(), DbErr> {
        match details {
            PlaceDetails::Continent(c) => {
                let mut model = continent_model(place_id, c);
                model.place_id = ActiveValue::Unchanged(place_id);
                model.update(self.db).await?;
            }
            PlaceDetails::Country(c) => {
                let mut model = country_model(place_id, c);
                model.place_id = ActiveValue::Unchanged(place_id);
                model.update(self.db).await?;
                self.replace_neighbours(place_id, &c.neighbours).await?;
            }
            PlaceDetails::Region(r) => {
                let mut model = region_model(place_id, r);
                model.place_id = ActiveValue::Unchanged(place_id);
                model.update(self.db).await?;
            }
            PlaceDetails::Subregion(s) => {
                let mut model = subregion_model(place_id, s);
                model.place_id = ActiveValue::Unchanged(place_id);
                model.update(self.db).await?;
            }
            PlaceDetails::City(c) => {
                let mut model = city_model(place_id, c);
                model.place_id = ActiveValue::Unchanged(place_id);
                model.update(self.db).await?;
            }
            PlaceDetails::District(d) => {
                let mut model = district_model(place_id, d);
                model.place_id = ActiveValue::Unchanged(place_id);
                model.update(self.db).await?;
            }
            PlaceDetails::PostalCode(p) => {
                let mut model = postal_code_model(place_id, p);
                model.place_id = ActiveValue::Unchanged(place_id);
                model.update(self.db).await?;
            }
        }

        Ok(())
    }
}

fn assemble(model: entity::place::Model, details: PlaceDetails) -> Place {
    Place {
        id: model.id,
        name: model.name,
        slug: model.slug,
        ranking: model.ranking,
        active: model.active,
        deleted: model.deleted,
        geonames: model.geonames,
        details,
    }
}

fn country_details(row: entity::country::Model, neighbours: Vec<i32>) -> CountryDetails {
    CountryDetails {
        code: row.code,
        code3: row.code3,
        population: row.population,
        area: row.area,
        currency: row.currency,
        currency_name: row.currency_name,
        languages: row.languages,
        phone: row.phone,
        continent: row.continent,
        tld: row.tld,
        capital: row.capital,
        neighbours,
    }
}

fn continent_model(place_id: i32, c: &ContinentDetails) -> entity::continent::ActiveModel {
    entity::continent::ActiveModel {
        place_id: ActiveValue::Set(place_id),
        code: ActiveValue::Set(c.code.clone()),
    }
}

fn country_model(place_id: i32, c: &CountryDetails) -> entity::country::ActiveModel {
    entity::country::ActiveModel {
        place_id: ActiveValue::Set(place_id),
        code: ActiveValue::Set(c.code.clone()),
        code3: ActiveValue::Set(c.code3.clone()),
        population: ActiveValue::Set(c.population),
        area: ActiveValue::Set(c.area),
        currency: ActiveValue::Set(c.currency.clone()),
        currency_name: ActiveValue::Set(c.currency_name.clone()),
        languages: ActiveValue::Set(c.languages.clone()),
        phone: ActiveValue::Set(c.phone.clone()),
        continent: ActiveValue::Set(c.continent.clone()),
        tld: ActiveValue::Set(c.tld.clone()),
        capital: ActiveValue::Set(c.capital.clone()),
    }
}

fn region_model(place_id: i32, r: &RegionDetails) -> entity::region::ActiveModel {
    entity::region::ActiveModel {
        place_id: ActiveValue::Set(place_id),
        name_std: ActiveValue::Set(r.name_std.clone()),
        code: ActiveValue::Set(r.code.clone()),
        country_id: ActiveValue::Set(r.country_id),
    }
}

fn subregion_model(place_id: i32, s: &SubregionDetails) -> entity::subregion::ActiveModel {
    entity::subregion::ActiveModel {
        place_id: ActiveValue::Set(place_id),
        name_std: ActiveValue::Set(s.name_std.clone()),
        code: ActiveValue::Set(s.code.clone()),
        region_id: ActiveValue::Set(s.region_id),
    }
}

fn city_model(place_id: i32, c: &CityDetails) -> entity::city::ActiveModel {
    entity::city::ActiveModel {
        place_id: ActiveValue::Set(place_id),
        name_std: ActiveValue::Set(c.name_std.clone()),
        latitude: ActiveValue::Set(c.latitude),
        longitude: ActiveValue::Set(c.longitude),
        population: ActiveValue::Set(c.population),
        region_id: ActiveValue::Set(c.region_id),
        subregion_id: ActiveValue::Set(c.subregion_id),
        country_id: ActiveValue::Set(c.country_id),
        elevation: ActiveValue::Set(c.elevation),
        feature_code: ActiveValue::Set(c.feature_code.clone()),
        timezone: ActiveValue::Set(c.timezone.clone()),
    }
}

fn district_model(place_id: i32, d: &DistrictDetails) -> entity::district::ActiveModel {
    entity::district::ActiveModel {
        place_id: ActiveValue::Set(place_id),
        name_std: ActiveValue::Set(d.name_std.clone()),
        latitude: ActiveValue::Set(d.latitude),
        longitude: ActiveValue::Set(d.longitude),
        population: ActiveValue::Set(d.population),
        city_id: ActiveValue::Set(d.city_id),
    }
}

fn postal_code_model(place_id: i32, p: &PostalCodeDetails) -> entity::postal_code::ActiveModel {
    entity::postal_code::ActiveModel {
        place_id: ActiveValue::Set(place_id),
        code: ActiveValue::Set(p.code.clone()),
        latitude: ActiveValue::Set(p.latitude),
        longitude: ActiveValue::Set(p.longitude),
        country_id: ActiveValue::Set(p.country_id),
        region_name: ActiveValue::Set(p.region_name.clone()),
        subregion_name: ActiveValue::Set(p.subregion_name.clone()),
        district_name: ActiveValue::Set(p.district_name.clone()),
    }
}
