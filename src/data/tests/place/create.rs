use super::*;

/// Expect the base row and the subtype row to be readable back as one place
#[tokio::test]
async fn creates_continent_with_subtype_row() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!()?;
    let place_repo = PlaceRepository::new(&test.db);

    let created = place_repo.create(new_continent("EU", "Europe")).await?;
    let fetched = place_repo.get(created.id).await?;

    assert_eq!(fetched.as_ref(), Some(&created));
    assert_eq!(created.kind(), PlaceKind::Continent);
    assert_eq!(created.slug, "europe");
    assert!(created.geonames);
    assert!(!created.deleted);

    Ok(())
}

/// Expect neighbour IDs to be stored once each, sorted, without a self reference
#[tokio::test]
async fn creates_country_with_neighbours() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!()?;
    test.places().insert_continent("EU", "Europe").await?;
    let spain = test.places().insert_country("EU", "ES", "Spain").await?;
    let belgium = test.places().insert_country("EU", "BE", "Belgium").await?;
    let place_repo = PlaceRepository::new(&test.db);

    let created = place_repo
        .create(new_country(
            "EU",
            "FR",
            "France",
            vec![spain.id, belgium.id, spain.id],
        ))
        .await?;
    let fetched = place_repo.get(created.id).await?.unwrap();

    let PlaceDetails::Country(country) = fetched.details else {
        panic!("Expected country details, got {:?}", fetched.details);
    };
    assert_eq!(country.neighbours, vec![spain.id, belgium.id]);
    assert_eq!(country.continent, "EU");

    Ok(())
}

/// Expect each listed neighbour to list the new country back
#[tokio::test]
async fn mirrors_neighbours_on_create() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!()?;
    test.places().insert_continent("EU", "Europe").await?;
    let spain = test.places().insert_country("EU", "ES", "Spain").await?;
    let place_repo = PlaceRepository::new(&test.db);

    let france = place_repo
        .create(new_country("EU", "FR", "France", vec![spain.id]))
        .await?;
    let andorra = place_repo
        .create(new_country("EU", "AD", "Andorra", vec![spain.id, france.id]))
        .await?;
    let fetched = place_repo.get(spain.id).await?.unwrap();

    let PlaceDetails::Country(country) = fetched.details else {
        panic!("Expected country details, got {:?}", fetched.details);
    };
    assert_eq!(country.neighbours, vec![france.id, andorra.id]);

    let fetched = place_repo.get(france.id).await?.unwrap();
    let PlaceDetails::Country(country) = fetched.details else {
        panic!("Expected country details, got {:?}", fetched.details);
    };
    assert_eq!(country.neighbours, vec![spain.id, andorra.id]);

    Ok(())
}

/// Expect names with quotes to be stored intact
#[tokio::test]
async fn stores_quoted_names() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!()?;
    let place_repo = PlaceRepository::new(&test.db);

    let created = place_repo
        .create(new_continent("OC", "O'Ceania \"Test\""))
        .await?;
    let fetched = place_repo.get(created.id).await?.unwrap();

    assert_eq!(fetched.name, "O'Ceania \"Test\"");

    Ok(())
}
