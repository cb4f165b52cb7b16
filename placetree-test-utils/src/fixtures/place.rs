use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use entity::place::PlaceKind;

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn places(&self) -> PlaceFixtures<'_> {
        PlaceFixtures { setup: self }
    }
}

/// Lowercases a name and joins its words with `-`, e.g. `Ile de France` -> `ile-de-france`.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Inserts places directly through the entities, bypassing the store's parent validation so
/// tests can also build broken hierarchies.
pub struct PlaceFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> PlaceFixtures<'a> {
    /// Inserts the shared place row with the slug derived from the name.
    pub async fn insert_place(
        &self,
        kind: PlaceKind,
        name: &str,
    ) -> Result<entity::place::Model, TestError> {
        Ok(
            entity::prelude::Place::insert(entity::place::ActiveModel {
                kind: ActiveValue::Set(kind),
                name: ActiveValue::Set(name.to_string()),
                slug: ActiveValue::Set(slugify(name)),
                ranking: ActiveValue::Set(0),
                active: ActiveValue::Set(true),
                deleted: ActiveValue::Set(false),
                geonames: ActiveValue::Set(true),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_continent(
        &self,
        code: &str,
        name: &str,
    ) -> Result<entity::place::Model, TestError> {
        let place = self.insert_place(PlaceKind::Continent, name).await?;

        entity::prelude::Continent::insert(entity::continent::ActiveModel {
            place_id: ActiveValue::Set(place.id),
            code: ActiveValue::Set(code.to_string()),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(place)
    }

    pub async fn insert_country(
        &self,
        continent_code: &str,
        code: &str,
        name: &str,
    ) -> Result<entity::place::Model, TestError> {
        let place = self.insert_place(PlaceKind::Country, name).await?;

        entity::prelude::Country::insert(entity::country::ActiveModel {
            place_id: ActiveValue::Set(place.id),
            code: ActiveValue::Set(code.to_string()),
            code3: ActiveValue::Set(format!("{}X", code)),
            population: ActiveValue::Set(1_000_000),
            area: ActiveValue::Set(None),
            currency: ActiveValue::Set(None),
            currency_name: ActiveValue::Set(None),
            languages: ActiveValue::Set(None),
            phone: ActiveValue::Set("00".to_string()),
            continent: ActiveValue::Set(continent_code.to_string()),
            tld: ActiveValue::Set(format!(".{}", code.to_lowercase())),
            capital: ActiveValue::Set(String::new()),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(place)
    }

    pub async fn insert_region(
        &self,
        country_id: i32,
        code: &str,
        name: &str,
    ) -> Result<entity::place::Model, TestError> {
        let place = self.insert_place(PlaceKind::Region, name).await?;

        entity::prelude::Region::insert(entity::region::ActiveModel {
            place_id: ActiveValue::Set(place.id),
            name_std: ActiveValue::Set(name.to_string()),
            code: ActiveValue::Set(code.to_string()),
            country_id: ActiveValue::Set(country_id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(place)
    }

    pub async fn insert_subregion(
        &self,
        region_id: i32,
        code: &str,
        name: &str,
    ) -> Result<entity::place::Model, TestError> {
        let place = self.insert_place(PlaceKind::Subregion, name).await?;

        entity::prelude::Subregion::insert(entity::subregion::ActiveModel {
            place_id: ActiveValue::Set(place.id),
            name_std: ActiveValue::Set(name.to_string()),
            code: ActiveValue::Set(code.to_string()),
            region_id: ActiveValue::Set(region_id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(place)
    }

    pub async fn insert_city(
        &self,
        country_id: i32,
        region_id: Option<i32>,
        name: &str,
    ) -> Result<entity::place::Model, TestError> {
        let place = self.insert_place(PlaceKind::City, name).await?;

        entity::prelude::City::insert(entity::city::ActiveModel {
            place_id: ActiveValue::Set(place.id),
            name_std: ActiveValue::Set(name.to_string()),
            latitude: ActiveValue::Set(0.0),
            longitude: ActiveValue::Set(0.0),
            population: ActiveValue::Set(10_000),
            region_id: ActiveValue::Set(region_id),
            subregion_id: ActiveValue::Set(None),
            country_id: ActiveValue::Set(country_id),
            elevation: ActiveValue::Set(None),
            feature_code: ActiveValue::Set("PPL".to_string()),
            timezone: ActiveValue::Set("UTC".to_string()),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(place)
    }

    pub async fn insert_district(
        &self,
        city_id: i32,
        name: &str,
    ) -> Result<entity::place::Model, TestError> {
        let place = self.insert_place(PlaceKind::District, name).await?;

        entity::prelude::District::insert(entity::district::ActiveModel {
            place_id: ActiveValue::Set(place.id),
            name_std: ActiveValue::Set(name.to_string()),
            latitude: ActiveValue::Set(0.0),
            longitude: ActiveValue::Set(0.0),
            population: ActiveValue::Set(1_000),
            city_id: ActiveValue::Set(city_id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(place)
    }

    pub async fn insert_postal_code(
        &self,
        country_id: i32,
        code: &str,
    ) -> Result<entity::place::Model, TestError> {
        let place = self.insert_place(PlaceKind::PostalCode, code).await?;

        entity::prelude::PostalCode::insert(entity::postal_code::ActiveModel {
            place_id: ActiveValue::Set(place.id),
            code: ActiveValue::Set(code.to_string()),
            latitude: ActiveValue::Set(0.0),
            longitude: ActiveValue::Set(0.0),
            country_id: ActiveValue::Set(country_id),
            region_name: ActiveValue::Set(None),
            subregion_name: ActiveValue::Set(None),
            district_name: ActiveValue::Set(None),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(place)
    }

    /// Inserts an active alternative name and attaches it to a place.
    pub async fn insert_alternative_name(
        &self,
        place_id: i32,
        name: &str,
        language: &str,
        is_preferred: bool,
    ) -> Result<entity::alternative_name::Model, TestError> {
        let alternative_name = entity::prelude::AlternativeName::insert(
            entity::alternative_name::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                language: ActiveValue::Set(language.to_string()),
                is_preferred: ActiveValue::Set(is_preferred),
                is_short: ActiveValue::Set(false),
                is_colloquial: ActiveValue::Set(false),
                active: ActiveValue::Set(true),
                deleted: ActiveValue::Set(false),
                geonames: ActiveValue::Set(true),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?;

        entity::prelude::PlaceAlternativeName::insert(entity::place_alternative_name::ActiveModel {
            place_id: ActiveValue::Set(place_id),
            alternative_name_id: ActiveValue::Set(alternative_name.id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(alternative_name)
    }
}
