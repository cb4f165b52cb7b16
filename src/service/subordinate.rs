use sea_orm::DatabaseConnection;

use crate::{
    data::place::PlaceRepository,
    error::Error,
    model::place::{Place, PlaceDetails},
};

pub struct SubordinateEnumerator<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubordinateEnumerator<'a> {
    /// Creates a new instance of [`SubordinateEnumerator`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places whose displayed full name embeds the given place, ordered by ID.
    ///
    /// - Region: its cities
    /// - Country: its cities and its regions
    /// - Continent: its countries plus each country's subordinates
    /// - Anything else: none
    pub async fn subordinates(&self, place: &Place) -> Result<Vec<Place>, Error> {
        let place_repo = PlaceRepository::new(self.db);

        let mut subordinates = match &place.details {
            PlaceDetails::Region(_) => place_repo.cities_by_region(place.id).await?,
            PlaceDetails::Country(_) => self.country_subordinates(place.id).await?,
            PlaceDetails::Continent(continent) => {
                let countries = place_repo.countries_by_continent(&continent.code).await?;

                let mut subordinates = Vec::new();
                for country in countries {
                    subordinates.extend(self.country_subordinates(country.id).await?);
                    subordinates.push(country);
                }
                subordinates
            }
            PlaceDetails::Subregion(_)
            | PlaceDetails::City(_)
            | PlaceDetails::District(_)
            | PlaceDetails::PostalCode(_) => Vec::new(),
        };

        subordinates.sort_by_key(|p| p.id);
        subordinates.dedup_by_key(|p| p.id);
        subordinates.retain(|p| p.id != place.id);

        Ok(subordinates)
    }

    async fn country_subordinates(&self, country_id: i32) -> Result<Vec<Place>, Error> {
        let place_repo = PlaceRepository::new(self.db);

        let mut subordinates = place_repo.cities_by_country(country_id).await?;
        subordinates.extend(place_repo.regions_by_country(country_id).await?);

        Ok(subordinates)
    }
}
