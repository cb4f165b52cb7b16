use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::{
    config::IndexerConfig,
    data::{
        alternative_name::AlternativeNameRepository, autocomplete::AutocompleteRepository,
        place::PlaceRepository,
    },
    error::{store::StoreError, Error},
    model::{
        autocomplete::{AutocompleteRow, UpsertMode},
        place::{Place, SlugPath},
    },
    service::{
        hierarchy::{load_place, HierarchyResolver},
        subordinate::SubordinateEnumerator,
        translate::{full_name, NameTranslator},
    },
};

/// Outcome of an indexing run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ReindexReport {
    /// Rows upserted, counted once per language.
    pub written: usize,
    /// Rows that could not be written, either because the place's hierarchy is broken or
    /// because the batch containing them failed.
    pub failed: usize,
    /// Enabled languages whose table doesn't exist.
    pub skipped_languages: Vec<String>,
}

impl ReindexReport {
    pub fn merge(&mut self, other: ReindexReport) {
        self.written += other.written;
        self.failed += other.failed;
        for language in other.skipped_languages {
            if !self.skipped_languages.contains(&language) {
                self.skipped_languages.push(language);
            }
        }
    }
}

/// Whether saving `current` over `previous` must refresh the subordinates' rows.
pub fn needs_cascade(previous: &Place, current: &Place, requested: bool) -> bool {
    requested || previous.display_changed(current)
}

/// Projects places into the per-language autocomplete tables.
pub struct AutocompleteIndexer<'a> {
    db: &'a DatabaseConnection,
    config: &'a IndexerConfig,
}

impl<'a> AutocompleteIndexer<'a> {
    /// Creates a new instance of [`AutocompleteIndexer`]
    pub fn new(db: &'a DatabaseConnection, config: &'a IndexerConfig) -> Self {
        Self { db, config }
    }

    /// Refreshes a place's rows in every available language.
    ///
    /// The place's own row is fully overwritten and any failure is returned. With `cascade`
    /// the rows of every subordinate get their name and slug refreshed in batches of
    /// `batch_size`; a subordinate that can't be resolved or a batch that fails to write is
    /// logged and counted in [`ReindexReport::failed`] without aborting the rest.
    pub async fn reindex(&self, place: &Place, cascade: bool) -> Result<ReindexReport, Error> {
        let autocomplete_repo = AutocompleteRepository::new(self.db);

        let (languages, mut report) = self.available_languages().await?;
        if languages.is_empty() {
            tracing::debug!(
                "No autocomplete tables available, skipping place ID {}",
                place.id
            );
            return Ok(report);
        }

        let rows = self.project(place, &languages).await?;
        for (language, row) in languages.iter().zip(rows) {
            autocomplete_repo
                .upsert_many(language, &[row], UpsertMode::Full)
                .await?;
            report.written += 1;
        }

        if !cascade {
            return Ok(report);
        }

        let subordinates = SubordinateEnumerator::new(self.db)
            .subordinates(place)
            .await?;

        tracing::debug!(
            "Cascading place ID {} to {} subordinate(s)",
            place.id,
            subordinates.len()
        );

        for batch in subordinates.chunks(self.config.batch_size) {
            self.write_batch(batch, &languages, UpsertMode::DisplayOnly, &mut report)
                .await?;
        }

        Ok(report)
    }

    /// Loads a place by ID and reindexes it.
    pub async fn reindex_by_id(
        &self,
        place_id: i32,
        cascade: bool,
    ) -> Result<ReindexReport, Error> {
        let place = load_place(&PlaceRepository::new(self.db), place_id)
            .await?
            .ok_or(StoreError::PlaceNotFound(place_id))?;

        self.reindex(&place, cascade).await
    }

    /// Reindexes, with cascade, every place owning an alternative name.
    pub async fn reindex_alternative_name_owners(
        &self,
        alternative_name_id: i32,
    ) -> Result<ReindexReport, Error> {
        let owner_ids = AlternativeNameRepository::new(self.db)
            .owner_ids(alternative_name_id)
            .await?;
        let owners = PlaceRepository::new(self.db).get_many(&owner_ids).await?;

        let mut report = ReindexReport::default();
        for owner in owners {
            report.merge(self.reindex(&owner, true).await?);
        }

        Ok(report)
    }

    /// Rewrites every row of every available language from the place table.
    ///
    /// Places are read in pages of `rebuild_page_size` ordered by ID, and each row is fully
    /// overwritten, so running it twice yields the same tables.
    pub async fn rebuild(&self) -> Result<ReindexReport, Error> {
        let place_repo = PlaceRepository::new(self.db);

        let (languages, mut report) = self.available_languages().await?;
        if languages.is_empty() {
            tracing::warn!("No autocomplete tables available, nothing to rebuild");
            return Ok(report);
        }

        tracing::info!(
            "Rebuilding autocomplete tables for language(s): {}",
            languages.join(", ")
        );

        let page_size = self.config.rebuild_page_size as u64;
        let mut after_id = i32::MIN;

        loop {
            let page = place_repo.page(after_id, page_size).await?;
            let Some(last_id) = page.last_id else {
                break;
            };
            after_id = last_id;

            for (place_id, kind) in &page.incomplete {
                tracing::warn!(
                    "Skipping autocomplete rows for place ID {}: {} row is missing",
                    place_id,
                    kind.label()
                );
                report.failed += languages.len();
            }

            for batch in page.places.chunks(self.config.batch_size) {
                self.write_batch(batch, &languages, UpsertMode::Full, &mut report)
                    .await?;
            }
        }

        tracing::info!(
            "Rebuilt autocomplete tables: {} row(s) written, {} failed",
            report.written,
            report.failed
        );

        Ok(report)
    }

    /// Computes and writes one batch of places in every language.
    async fn write_batch(
        &self,
        places: &[Place],
        languages: &[String],
        mode: UpsertMode,
        report: &mut ReindexReport,
    ) -> Result<(), Error> {
        let autocomplete_repo = AutocompleteRepository::new(self.db);
        let mut rows_by_language: Vec<Vec<AutocompleteRow>> = vec![Vec::new(); languages.len()];

        for place in places {
            match self.project(place, languages).await {
                Ok(rows) => {
                    for (language_rows, row) in rows_by_language.iter_mut().zip(rows) {
                        language_rows.push(row);
                    }
                }
                Err(e) if e.is_integrity_error() => {
                    tracing::warn!(
                        "Skipping autocomplete rows for place ID {}: {}",
                        place.id,
                        e
                    );
                    report.failed += languages.len();
                }
                Err(e) => return Err(e),
            }
        }

        for (language, rows) in languages.iter().zip(rows_by_language) {
            match autocomplete_repo.upsert_many(language, &rows, mode).await {
                Ok(()) => report.written += rows.len(),
                Err(e) => {
                    tracing::warn!(
                        "Failed to write {} autocomplete row(s) for language '{}': {:?}",
                        rows.len(),
                        language,
                        e
                    );
                    report.failed += rows.len();
                }
            }
        }

        Ok(())
    }

    /// One row per language, in the order of `languages`.
    async fn project(
        &self,
        place: &Place,
        languages: &[String],
    ) -> Result<Vec<AutocompleteRow>, Error> {
        let chain = HierarchyResolver::new(self.db).resolve(place).await?;
        let names = NameTranslator::new(self.db)
            .chain_alternative_names(&chain)
            .await?;
        let slug = SlugPath::from_chain(&chain).path;

        Ok(languages
            .iter()
            .map(|language| AutocompleteRow {
                id: place.id,
                name: full_name(&chain, &names, language),
                slug: slug.clone(),
                active: place.active,
                deleted: place.deleted,
                ranking: place.ranking,
            })
            .collect())
    }

    /// Splits the enabled languages into those with a table and those without.
    async fn available_languages(&self) -> Result<(Vec<String>, ReindexReport), Error> {
        let autocomplete_repo = AutocompleteRepository::new(self.db);

        let mut languages = Vec::with_capacity(self.config.languages.len());
        let mut report = ReindexReport::default();

        for language in &self.config.languages {
            if autocomplete_repo.has_table(language).await? {
                languages.push(language.clone());
            } else {
                tracing::debug!("Autocomplete table for language '{}' is missing", language);
                report.skipped_languages.push(language.clone());
            }
        }

        Ok((languages, report))
    }
}
