use super::*;

/// Expect shared and subtype columns to be overwritten
#[tokio::test]
async fn updates_shared_and_subtype_columns() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!()?;
    test.places().insert_continent("EU", "Europe").await?;
    let france = test.places().insert_country("EU", "FR", "France").await?;
    let region = test.places().insert_region(france.id, "11", "Idf").await?;
    let place_repo = PlaceRepository::new(&test.db);

    let mut place = place_repo.get(region.id).await?.unwrap();
    place.name = "Ile-de-France".to_string();
    place.slug = "ile-de-france".to_string();
    place.ranking = 7;
    place.details = PlaceDetails::Region(RegionDetails {
        name_std: "Île-de-France".to_string(),
        code: "11".to_string(),
        country_id: france.id,
    });

    let updated = place_repo.update(&place).await?;
    let fetched = place_repo.get(region.id).await?.unwrap();

    assert_eq!(updated, place);
    assert_eq!(fetched, place);

    Ok(())
}

/// Expect the neighbour list to be replaced rather than merged
#[tokio::test]
async fn replaces_country_neighbours() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!()?;
    test.places().insert_continent("EU", "Europe").await?;
    let spain = test.places().insert_country("EU", "ES", "Spain").await?;
    let italy = test.places().insert_country("EU", "IT", "Italy").await?;
    let place_repo = PlaceRepository::new(&test.db);
    let mut france = place_repo
        .create(new_country("EU", "FR", "France", vec![spain.id]))
        .await?;

    if let PlaceDetails::Country(country) = &mut france.details {
        country.neighbours = vec![italy.id];
    }
    place_repo.update(&france).await?;
    let fetched = place_repo.get(france.id).await?.unwrap();

    let PlaceDetails::Country(country) = fetched.details else {
        panic!("Expected country details, got {:?}", fetched.details);
    };
    assert_eq!(country.neighbours, vec![italy.id]);

    Ok(())
}

/// Expect a dropped neighbour to lose its reverse edge and a new one to gain it
#[tokio::test]
async fn mirrors_replaced_neighbours() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!()?;
    test.places().insert_continent("EU", "Europe").await?;
    let spain = test.places().insert_country("EU", "ES", "Spain").await?;
    let italy = test.places().insert_country("EU", "IT", "Italy").await?;
    let place_repo = PlaceRepository::new(&test.db);
    let mut france = place_repo
        .create(new_country("EU", "FR", "France", vec![spain.id]))
        .await?;

    if let PlaceDetails::Country(country) = &mut france.details {
        country.neighbours = vec![italy.id];
    }
    place_repo.update(&france).await?;

    let spain = place_repo.get(spain.id).await?.unwrap();
    let italy = place_repo.get(italy.id).await?.unwrap();
    let (PlaceDetails::Country(spain), PlaceDetails::Country(italy)) =
        (spain.details, italy.details)
    else {
        panic!("Expected country details");
    };
    assert!(spain.neighbours.is_empty());
    assert_eq!(italy.neighbours, vec![france.id]);

    Ok(())
}

/// Expect an error when updating a place that doesn't exist
#[tokio::test]
async fn fails_for_missing_place() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!()?;
    let place_repo = PlaceRepository::new(&test.db);
    let mut place = place_repo.create(new_continent("EU", "Europe")).await?;
    place.id += 100;

    let result = place_repo.update(&place).await;

    assert!(result.is_err());

    Ok(())
}
