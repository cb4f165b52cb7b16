use placetree_test_utils::prelude::*;
use sea_orm::DbErr;

use crate::{
    data::place::PlaceRepository,
    model::place::{
        ContinentDetails, CountryDetails, NewPlace, PlaceDetails, PlaceKind, RegionDetails,
    },
};

mod create;
mod get;
mod queries;
mod update;

fn new_continent(code: &str, name: &str) -> NewPlace {
    NewPlace {
        name: name.to_string(),
        slug: slugify(name),
        ranking: 0,
        active: true,
        geonames: true,
        details: PlaceDetails::Continent(ContinentDetails {
            code: code.to_string(),
        }),
    }
}

fn new_country(continent: &str, code: &str, name: &str, neighbours: Vec<i32>) -> NewPlace {
    NewPlace {
        name: name.to_string(),
        slug: slugify(name),
        ranking: 10,
        active: true,
        geonames: true,
        details: PlaceDetails::Country(CountryDetails {
            code: code.to_string(),
            code3: format!("{}X", code),
            population: 5_000_000,
            area: Some(100_000),
            currency: Some("EUR".to_string()),
            currency_name: Some("Euro".to_string()),
            languages: Some("fr".to_string()),
            phone: "33".to_string(),
            continent: continent.to_string(),
            tld: ".fr".to_string(),
            capital: "Paris".to_string(),
            neighbours,
        }),
    }
}
