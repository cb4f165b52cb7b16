use super::*;

/// Expect None for an ID with no place row
#[tokio::test]
async fn returns_none_for_missing_place() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!()?;
    let place_repo = PlaceRepository::new(&test.db);

    let result = place_repo.get(42).await?;

    assert!(result.is_none());

    Ok(())
}

/// Expect the subtype row matching the kind discriminant to be attached
#[tokio::test]
async fn loads_city_details() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!()?;
    test.places().insert_continent("EU", "Europe").await?;
    let france = test.places().insert_country("EU", "FR", "France").await?;
    let idf = test
        .places()
        .insert_region(france.id, "11", "Ile de France")
        .await?;
    let paris = test
        .places()
        .insert_city(france.id, Some(idf.id), "Paris")
        .await?;
    let place_repo = PlaceRepository::new(&test.db);

    let place = place_repo.get(paris.id).await?.unwrap();

    assert_eq!(place.kind(), PlaceKind::City);
    let PlaceDetails::City(city) = &place.details else {
        panic!("Expected city details, got {:?}", place.details);
    };
    assert_eq!(city.region_id, Some(idf.id));
    assert_eq!(city.country_id, france.id);

    Ok(())
}

/// Expect an error when the subtype row for the discriminant is missing
#[tokio::test]
async fn fails_without_subtype_row() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!()?;
    let orphan = test
        .places()
        .insert_place(PlaceKind::Region, "Orphan")
        .await?;
    let place_repo = PlaceRepository::new(&test.db);

    let result = place_repo.get(orphan.id).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

/// Expect places of mixed kinds ordered by ID with unknown IDs skipped
#[tokio::test]
async fn gets_many_of_mixed_kinds() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!()?;
    let europe = test.places().insert_continent("EU", "Europe").await?;
    let france = test.places().insert_country("EU", "FR", "France").await?;
    let place_repo = PlaceRepository::new(&test.db);

    let places = place_repo.get_many(&[france.id, 999, europe.id]).await?;

    let ids: Vec<i32> = places.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![europe.id, france.id]);
    assert_eq!(places[0].kind(), PlaceKind::Continent);
    assert_eq!(places[1].kind(), PlaceKind::Country);

    Ok(())
}

/// Expect the kind to be readable without the subtype row
#[tokio::test]
async fn gets_kind() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!()?;
    let europe = test.places().insert_continent("EU", "Europe").await?;
    let place_repo = PlaceRepository::new(&test.db);

    assert_eq!(
        place_repo.get_kind(europe.id).await?,
        Some(PlaceKind::Continent)
    );
    assert_eq!(place_repo.get_kind(europe.id + 1).await?, None);

    Ok(())
}
