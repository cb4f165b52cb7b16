use super::*;

/// Expect linking the same pair twice to keep a single link
#[tokio::test]
async fn associate_is_idempotent() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!()?;
    let europe = test.places().insert_continent("EU", "Europe").await?;
    let asia = test.places().insert_continent("AS", "Asia").await?;
    let alternative_name_repo = AlternativeNameRepository::new(&test.db);
    let name = alternative_name_repo
        .create(new_alternative_name("Eurasia", "en"))
        .await?;

    alternative_name_repo.associate(europe.id, name.id).await?;
    alternative_name_repo.associate(europe.id, name.id).await?;
    alternative_name_repo.associate(asia.id, name.id).await?;

    let owners = alternative_name_repo.owner_ids(name.id).await?;
    assert_eq!(owners, vec![europe.id, asia.id]);

    Ok(())
}

/// Expect disassociate to report whether a link was removed
#[tokio::test]
async fn disassociate_reports_removal() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!()?;
    let europe = test.places().insert_continent("EU", "Europe").await?;
    let name = test
        .places()
        .insert_alternative_name(europe.id, "Europa", "pt", false)
        .await?;
    let alternative_name_repo = AlternativeNameRepository::new(&test.db);

    let removed = alternative_name_repo.disassociate(europe.id, name.id).await?;
    let removed_again = alternative_name_repo.disassociate(europe.id, name.id).await?;

    assert!(removed);
    assert!(!removed_again);
    assert!(alternative_name_repo.owner_ids(name.id).await?.is_empty());

    Ok(())
}
