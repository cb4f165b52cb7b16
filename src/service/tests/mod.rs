use placetree_test_utils::prelude::*;

use crate::{config::IndexerConfig, data::place::PlaceRepository, model::place::Place};


/// Place IDs of a small European hierarchy.
struct World {
    europe: i32,
    france: i32,
    ile_de_france: i32,
    paris_subregion: i32,
    paris: i32,
    marais: i32,
    postal_code: i32,
    spain: i32,
    madrid: i32,
}

/// Europe > France > Ile de France > Paris (city, subregion, district), a French postal code,
/// and Spain with a region-less Madrid.
async fn seed_world(test: &TestSetup) -> Result<World, TestError> {
    let places = test.places();

    let europe = places.insert_continent("EU", "Europe").await?;
    let france = places.insert_country("EU", "FR", "France").await?;
    let ile_de_france = places.insert_region(france.id, "11", "Ile de France").await?;
    let paris_subregion = places.insert_subregion(ile_de_france.id, "75", "Paris").await?;
    let paris = places
        .insert_city(france.id, Some(ile_de_france.id), "Paris")
        .await?;
    let marais = places.insert_district(paris.id, "Le Marais").await?;
    let postal_code = places.insert_postal_code(france.id, "75001").await?;
    let spain = places.insert_country("EU", "ES", "Spain").await?;
    let madrid = places.insert_city(spain.id, None, "Madrid").await?;

    Ok(World {
        europe: europe.id,
        france: france.id,
        ile_de_france: ile_de_france.id,
        paris_subregion: paris_subregion.id,
        paris: paris.id,
        marais: marais.id,
        postal_code: postal_code.id,
        spain: spain.id,
        madrid: madrid.id,
    })
}

async fn load(test: &TestSetup, place_id: i32) -> Result<Place, TestError> {
    Ok(PlaceRepository::new(&test.db)
        .get(place_id)
        .await?
        .expect("fixture place should exist"))
}

fn indexer_config(languages: &[&str]) -> IndexerConfig {
    IndexerConfig {
        languages: languages.iter().map(|l| l.to_string()).collect(),
        rebuild_page_size: 2,
        batch_size: 2,
    }
}

fn ids(places: &[Place]) -> Vec<i32> {
    places.iter().map(|p| p.id).collect()
}
