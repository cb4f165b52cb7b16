use super::*;

/// Expect table detection to follow the language code
#[tokio::test]
async fn detects_language_tables() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!("en")?;
    let autocomplete_repo = AutocompleteRepository::new(&test.db);

    assert!(autocomplete_repo.has_table("en").await?);
    assert!(autocomplete_repo.has_table("en-GB").await?);
    assert!(!autocomplete_repo.has_table("pt").await?);

    Ok(())
}

/// Expect a full upsert to overwrite every column of an existing row
#[tokio::test]
async fn full_upsert_overwrites_row() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!("en")?;
    let autocomplete_repo = AutocompleteRepository::new(&test.db);
    autocomplete_repo
        .upsert_many("en", &[row(1, "Europe", "europe", 0)], UpsertMode::Full)
        .await?;

    let mut replacement = row(1, "Europa", "europa", 5);
    replacement.deleted = true;
    autocomplete_repo
        .upsert_many("en", &[replacement.clone()], UpsertMode::Full)
        .await?;

    assert_eq!(autocomplete_repo.find("en", 1).await?, Some(replacement));
    assert_eq!(autocomplete_repo.all("en").await?.len(), 1);

    Ok(())
}

/// Expect a display-only upsert to keep flags and ranking of existing rows while new rows
/// carry their own
#[tokio::test]
async fn display_only_upsert_keeps_flags() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!("en")?;
    let autocomplete_repo = AutocompleteRepository::new(&test.db);
    let mut existing = row(1, "Europe, France", "europe/france", 9);
    existing.active = false;
    autocomplete_repo
        .upsert_many("en", &[existing], UpsertMode::Full)
        .await?;

    let mut inserted = row(2, "Europe, Francia, Paris", "europe/francia/paris", 3);
    inserted.deleted = true;
    autocomplete_repo
        .upsert_many(
            "en",
            &[
                row(1, "Europe, Francia", "europe/francia", 0),
                inserted.clone(),
            ],
            UpsertMode::DisplayOnly,
        )
        .await?;

    let rows = autocomplete_repo.all("en").await?;
    let mut expected_existing = row(1, "Europe, Francia", "europe/francia", 9);
    expected_existing.active = false;
    assert_eq!(rows, vec![expected_existing, inserted]);

    Ok(())
}

/// Expect quote characters to survive the round trip
#[tokio::test]
async fn stores_quotes_intact() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!("pt")?;
    let autocomplete_repo = AutocompleteRepository::new(&test.db);
    let quoted = row(7, "Côte d'Ivoire, \"Abidjan\"", "cote-d'ivoire/abidjan", 1);

    autocomplete_repo
        .upsert_many("pt", &[quoted.clone()], UpsertMode::Full)
        .await?;

    assert_eq!(autocomplete_repo.find("pt", 7).await?, Some(quoted));

    Ok(())
}

/// Expect an error when writing to a table that doesn't exist
#[tokio::test]
async fn fails_for_missing_table() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!("en")?;
    let autocomplete_repo = AutocompleteRepository::new(&test.db);

    let result = autocomplete_repo
        .upsert_many("de", &[row(1, "Europa", "europa", 0)], UpsertMode::Full)
        .await;

    assert!(result.is_err());

    Ok(())
}
