use entity::autocomplete;
use sea_orm_migration::prelude::*;

/// Languages provisioned by default. Enabling another language means adding a migration
/// that creates its table before pointing `AUTOCOMPLETE_LANGUAGES` at it.
pub const AUTOCOMPLETE_LANGUAGES: [&str; 2] = ["en", "pt"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for language in AUTOCOMPLETE_LANGUAGES {
            manager
                .create_table(autocomplete::create_table_statement(language))
                .await?;

            manager
                .create_index(autocomplete::create_name_index_statement(language))
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for language in AUTOCOMPLETE_LANGUAGES {
            manager
                .drop_table(
                    Table::drop()
                        .table(autocomplete::table(language))
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}
