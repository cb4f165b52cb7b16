use super::*;

/// Expect a created alternative name to be readable back
#[tokio::test]
async fn creates_alternative_name() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!()?;
    let alternative_name_repo = AlternativeNameRepository::new(&test.db);

    let created = alternative_name_repo
        .create(new_alternative_name("Franca", "pt"))
        .await?;
    let fetched = alternative_name_repo.get(created.id).await?;

    assert_eq!(fetched, Some(created.clone()));
    assert_eq!(created.language, "pt");
    assert!(created.is_visible());

    Ok(())
}

/// Expect every field to be overwritten by an update
#[tokio::test]
async fn updates_alternative_name() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!()?;
    let alternative_name_repo = AlternativeNameRepository::new(&test.db);
    let mut name = alternative_name_repo
        .create(new_alternative_name("Franca", "pt"))
        .await?;

    name.name = "França".to_string();
    name.is_preferred = true;
    name.geonames = false;
    alternative_name_repo.update(&name).await?;
    let fetched = alternative_name_repo.get(name.id).await?;

    assert_eq!(fetched, Some(name));

    Ok(())
}
