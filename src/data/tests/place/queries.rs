use super::*;

/// Expect every parent query to return only the children of that parent
#[tokio::test]
async fn queries_places_by_parent() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!()?;
    let places = test.places();
    places.insert_continent("EU", "Europe").await?;
    places.insert_continent("SA", "South America").await?;
    let france = places.insert_country("EU", "FR", "France").await?;
    let spain = places.insert_country("EU", "ES", "Spain").await?;
    let brazil = places.insert_country("SA", "BR", "Brazil").await?;
    let idf = places.insert_region(france.id, "11", "Ile de France").await?;
    let catalonia = places.insert_region(spain.id, "CT", "Catalonia").await?;
    let paris_dept = places.insert_subregion(idf.id, "75", "Paris Dept").await?;
    let paris = places.insert_city(france.id, Some(idf.id), "Paris").await?;
    let lyon = places.insert_city(france.id, None, "Lyon").await?;
    places
        .insert_city(spain.id, Some(catalonia.id), "Barcelona")
        .await?;
    let marais = places.insert_district(paris.id, "Le Marais").await?;
    let postal = places.insert_postal_code(france.id, "75001").await?;
    let place_repo = PlaceRepository::new(&test.db);

    let ids = |places: Vec<crate::model::place::Place>| {
        let mut ids: Vec<i32> = places.into_iter().map(|p| p.id).collect();
        ids.sort();
        ids
    };

    assert_eq!(ids(place_repo.cities_by_region(idf.id).await?), vec![paris.id]);
    assert_eq!(
        ids(place_repo.cities_by_country(france.id).await?),
        vec![paris.id, lyon.id]
    );
    assert_eq!(
        ids(place_repo.regions_by_country(france.id).await?),
        vec![idf.id]
    );
    assert_eq!(
        ids(place_repo.countries_by_continent("EU").await?),
        vec![france.id, spain.id]
    );
    assert_eq!(
        ids(place_repo.countries_by_continent("SA").await?),
        vec![brazil.id]
    );
    assert_eq!(
        ids(place_repo.subregions_by_region(idf.id).await?),
        vec![paris_dept.id]
    );
    assert_eq!(
        ids(place_repo.districts_by_city(paris.id).await?),
        vec![marais.id]
    );
    assert_eq!(
        ids(place_repo.postal_codes_by_country(france.id).await?),
        vec![postal.id]
    );
    assert!(place_repo.cities_by_region(catalonia.id + 100).await?.is_empty());

    Ok(())
}

/// Expect the lowest ID to win when two continents share a code
#[tokio::test]
async fn finds_continent_by_code() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!()?;
    let first = test.places().insert_continent("EU", "Europe").await?;
    test.places().insert_continent("EU", "Europe Again").await?;
    let place_repo = PlaceRepository::new(&test.db);

    let found = place_repo.find_continent_by_code("EU").await?.unwrap();
    let missing = place_repo.find_continent_by_code("AN").await?;

    assert_eq!(found.id, first.id);
    assert!(missing.is_none());

    Ok(())
}

/// Expect listings ordered by name, hiding soft-deleted places unless requested
#[tokio::test]
async fn lists_places_by_name() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!()?;
    let place_repo = PlaceRepository::new(&test.db);
    let zealandia = place_repo.create(new_continent("ZE", "Zealandia")).await?;
    let asia = place_repo.create(new_continent("AS", "Asia")).await?;
    let mut atlantis = place_repo.create(new_continent("AT", "Atlantis")).await?;
    atlantis.deleted = true;
    place_repo.update(&atlantis).await?;

    let visible: Vec<i32> = place_repo
        .list(false, 0, 10)
        .await?
        .into_iter()
        .map(|p| p.id)
        .collect();
    let all: Vec<i32> = place_repo
        .list(true, 0, 10)
        .await?
        .into_iter()
        .map(|p| p.id)
        .collect();
    let second_page: Vec<i32> = place_repo
        .list(true, 1, 1)
        .await?
        .into_iter()
        .map(|p| p.id)
        .collect();

    assert_eq!(visible, vec![asia.id, zealandia.id]);
    assert_eq!(all, vec![asia.id, atlantis.id, zealandia.id]);
    assert_eq!(second_page, vec![atlantis.id]);

    Ok(())
}

/// Expect keyset pages to cover every place exactly once
#[tokio::test]
async fn pages_by_id() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!()?;
    let mut expected = Vec::new();
    for code in ["AF", "AN", "AS", "EU", "NA"] {
        expected.push(test.places().insert_continent(code, code).await?.id);
    }
    let place_repo = PlaceRepository::new(&test.db);

    let mut seen = Vec::new();
    let mut after_id = i32::MIN;
    loop {
        let page = place_repo.page(after_id, 2).await?;
        let Some(last_id) = page.last_id else {
            break;
        };
        assert!(page.places.len() <= 2);
        assert!(page.incomplete.is_empty());
        after_id = last_id;
        seen.extend(page.places.into_iter().map(|p| p.id));
    }

    assert_eq!(seen, expected);

    Ok(())
}

/// Expect a place row without its subtype row to be listed apart instead of failing the page
#[tokio::test]
async fn pages_past_incomplete_rows() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!()?;
    let europe = test.places().insert_continent("EU", "Europe").await?;
    let ghost = test
        .places()
        .insert_place(PlaceKind::City, "Ghost")
        .await?;
    let place_repo = PlaceRepository::new(&test.db);

    let page = place_repo.page(i32::MIN, 10).await?;
    let next = place_repo.page(ghost.id, 10).await?;

    assert_eq!(
        page.places.into_iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![europe.id]
    );
    assert_eq!(page.incomplete, vec![(ghost.id, PlaceKind::City)]);
    assert_eq!(page.last_id, Some(ghost.id));
    assert_eq!(next.last_id, None);

    Ok(())
}
