use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000001_create_place_table::Place;

static IDX_ALTERNATIVE_NAME_LANGUAGE: &str = "idx-alternative_name-language";
static FK_PLACE_ALTERNATIVE_NAME_PLACE_ID: &str = "fk-place_alternative_name-place_id";
static FK_PLACE_ALTERNATIVE_NAME_ALTERNATIVE_NAME_ID: &str =
    "fk-place_alternative_name-alternative_name_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AlternativeName::Table)
                    .if_not_exists()
                    .col(pk_auto(AlternativeName::Id))
                    .col(string_len(AlternativeName::Name, 256))
                    .col(string_len(AlternativeName::Language, 100))
                    .col(boolean(AlternativeName::IsPreferred).default(false))
                    .col(boolean(AlternativeName::IsShort).default(false))
                    .col(boolean(AlternativeName::IsColloquial).default(false))
                    .col(boolean(AlternativeName::Active).default(true))
                    .col(boolean(AlternativeName::Deleted).default(false))
                    .col(boolean(AlternativeName::Geonames).default(false))
                    .col(timestamp(AlternativeName::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PlaceAlternativeName::Table)
                    .if_not_exists()
                    .col(integer(PlaceAlternativeName::PlaceId))
                    .col(integer(PlaceAlternativeName::AlternativeNameId))
                    .primary_key(
                        Index::create()
                            .col(PlaceAlternativeName::PlaceId)
                            .col(PlaceAlternativeName::AlternativeNameId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PLACE_ALTERNATIVE_NAME_PLACE_ID)
                            .from(PlaceAlternativeName::Table, PlaceAlternativeName::PlaceId)
                            .to(Place::Table, Place::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PLACE_ALTERNATIVE_NAME_ALTERNATIVE_NAME_ID)
                            .from(
                                PlaceAlternativeName::Table,
                                PlaceAlternativeName::AlternativeNameId,
                            )
                            .to(AlternativeName::Table, AlternativeName::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ALTERNATIVE_NAME_LANGUAGE)
                    .table(AlternativeName::Table)
                    .col(AlternativeName::Language)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlaceAlternativeName::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(AlternativeName::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AlternativeName {
    Table,
    Id,
    Name,
    Language,
    IsPreferred,
    IsShort,
    IsColloquial,
    Active,
    Deleted,
    Geonames,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum PlaceAlternativeName {
    Table,
    PlaceId,
    AlternativeNameId,
}
