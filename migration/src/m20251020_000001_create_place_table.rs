use sea_orm_migration::{prelude::*, schema::*};

static IDX_PLACE_NAME: &str = "idx-place-name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Place::Table)
                    .if_not_exists()
                    .col(pk_auto(Place::Id))
                    .col(string_len(Place::Kind, 16))
                    .col(string_len(Place::Name, 200))
                    .col(string_len(Place::Slug, 200))
                    .col(integer(Place::Ranking).default(0))
                    .col(boolean(Place::Active).default(true))
                    .col(boolean(Place::Deleted).default(false))
                    .col(boolean(Place::Geonames).default(false))
                    .col(timestamp(Place::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLACE_NAME)
                    .table(Place::Table)
                    .col(Place::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(IDX_PLACE_NAME).table(Place::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Place::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Place {
    Table,
    Id,
    Kind,
    Name,
    Slug,
    Ranking,
    Active,
    Deleted,
    Geonames,
    UpdatedAt,
}
