use super::*;

/// Expect visible prefix matches ordered by ranking, highest first
#[tokio::test]
async fn searches_visible_rows_by_ranking() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!("en")?;
    let autocomplete_repo = AutocompleteRepository::new(&test.db);
    let mut deleted = row(4, "Europe, France, Paris 2", "europe/france/paris-2", 100);
    deleted.deleted = true;
    let mut inactive = row(5, "Europe, France, Paris 3", "europe/france/paris-3", 100);
    inactive.active = false;
    autocomplete_repo
        .upsert_many(
            "en",
            &[
                row(1, "Europe", "europe", 1),
                row(2, "Europe, France", "europe/france", 50),
                row(3, "Europe, France, Paris", "europe/france/paris", 90),
                deleted,
                inactive,
                row(6, "South America", "south-america", 100),
            ],
            UpsertMode::Full,
        )
        .await?;

    let ids: Vec<i32> = autocomplete_repo
        .search_prefix("en", "europe, fr", 10)
        .await?
        .into_iter()
        .map(|r| r.id)
        .collect();
    let limited = autocomplete_repo.search_prefix("en", "EUROPE", 2).await?;

    assert_eq!(ids, vec![3, 2]);
    assert_eq!(
        limited.into_iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![3, 2]
    );

    Ok(())
}

/// Expect LIKE wildcards in the prefix to match literally
#[tokio::test]
async fn treats_wildcards_literally() -> Result<(), TestError> {
    let test = test_setup_with_place_tables!("en")?;
    let autocomplete_repo = AutocompleteRepository::new(&test.db);
    autocomplete_repo
        .upsert_many(
            "en",
            &[row(1, "100% Island", "100-island", 0), row(2, "1000 Lakes", "1000-lakes", 0)],
            UpsertMode::Full,
        )
        .await?;

    let rows = autocomplete_repo.search_prefix("en", "100%", 10).await?;

    assert_eq!(rows.into_iter().map(|r| r.id).collect::<Vec<_>>(), vec![1]);

    Ok(())
}
