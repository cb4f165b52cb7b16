use sea_orm::DatabaseConnection;

use crate::{
    config::IndexerConfig,
    error::Error,
    model::worker::IndexJob,
    service::indexer::{AutocompleteIndexer, ReindexReport},
};

/// Handler for processing index jobs from the queue
///
/// Each job type has a corresponding method that runs the autocomplete indexer.
pub struct IndexJobHandler {
    db: DatabaseConnection,
    config: IndexerConfig,
}

impl IndexJobHandler {
    /// Create a new IndexJobHandler
    pub fn new(db: DatabaseConnection, config: IndexerConfig) -> Self {
        Self { db, config }
    }

    /// Handle an index job by delegating to the appropriate handler method
    pub async fn handle(&self, job: &IndexJob) -> Result<ReindexReport, Error> {
        match job {
            IndexJob::ReindexPlace { place_id, cascade } => {
                self.reindex_place(*place_id, *cascade).await
            }
            IndexJob::ReindexAlternativeNameOwners {
                alternative_name_id,
            } => {
                self.reindex_alternative_name_owners(*alternative_name_id)
                    .await
            }
            IndexJob::Rebuild => self.rebuild().await,
        }
    }

    pub async fn reindex_place(
        &self,
        place_id: i32,
        cascade: bool,
    ) -> Result<ReindexReport, Error> {
        tracing::debug!(
            "Processing reindex for place_id: {} (cascade: {})",
            place_id,
            cascade
        );

        let report = AutocompleteIndexer::new(&self.db, &self.config)
            .reindex_by_id(place_id, cascade)
            .await
            .map_err(|e| {
                tracing::error!("Failed to reindex place {}: {:?}", place_id, e);
                e
            })?;

        tracing::debug!(
            "Successfully reindexed place {} ({} row(s) written, {} failed)",
            place_id,
            report.written,
            report.failed
        );

        Ok(report)
    }

    pub async fn reindex_alternative_name_owners(
        &self,
        alternative_name_id: i32,
    ) -> Result<ReindexReport, Error> {
        tracing::debug!(
            "Processing reindex for owners of alternative_name_id: {}",
            alternative_name_id
        );

        let report = AutocompleteIndexer::new(&self.db, &self.config)
            .reindex_alternative_name_owners(alternative_name_id)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to reindex owners of alternative name {}: {:?}",
                    alternative_name_id,
                    e
                );
                e
            })?;

        tracing::debug!(
            "Successfully reindexed owners of alternative name {} ({} row(s) written)",
            alternative_name_id,
            report.written
        );

        Ok(report)
    }

    pub async fn rebuild(&self) -> Result<ReindexReport, Error> {
        tracing::debug!("Processing autocomplete rebuild");

        AutocompleteIndexer::new(&self.db, &self.config)
            .rebuild()
            .await
            .map_err(|e| {
                tracing::error!("Failed to rebuild autocomplete tables: {:?}", e);
                e
            })
    }
}
