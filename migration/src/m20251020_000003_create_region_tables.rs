use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251020_000001_create_place_table::Place,
    m20251020_000002_create_continent_country_tables::Country,
};

static IDX_REGION_COUNTRY_ID: &str = "idx-region-country_id";
static IDX_SUBREGION_REGION_ID: &str = "idx-subregion-region_id";
static FK_REGION_PLACE_ID: &str = "fk-region-place_id";
static FK_REGION_COUNTRY_ID: &str = "fk-region-country_id";
static FK_SUBREGION_PLACE_ID: &str = "fk-subregion-place_id";
static FK_SUBREGION_REGION_ID: &str = "fk-subregion-region_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Region::Table)
                    .if_not_exists()
                    .col(integer(Region::PlaceId).primary_key())
                    .col(string_len(Region::NameStd, 200))
                    .col(string_len(Region::Code, 200))
                    .col(integer(Region::CountryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REGION_PLACE_ID)
                            .from(Region::Table, Region::PlaceId)
                            .to(Place::Table, Place::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REGION_COUNTRY_ID)
                            .from(Region::Table, Region::CountryId)
                            .to(Country::Table, Country::PlaceId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Subregion::Table)
                    .if_not_exists()
                    .col(integer(Subregion::PlaceId).primary_key())
                    .col(string_len(Subregion::NameStd, 200))
                    .col(string_len(Subregion::Code, 200))
                    .col(integer(Subregion::RegionId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SUBREGION_PLACE_ID)
                            .from(Subregion::Table, Subregion::PlaceId)
                            .to(Place::Table, Place::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SUBREGION_REGION_ID)
                            .from(Subregion::Table, Subregion::RegionId)
                            .to(Region::Table, Region::PlaceId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_REGION_COUNTRY_ID)
                    .table(Region::Table)
                    .col(Region::CountryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SUBREGION_REGION_ID)
                    .table(Subregion::Table)
                    .col(Subregion::RegionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Subregion::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Region::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Region {
    Table,
    PlaceId,
    NameStd,
    Code,
    CountryId,
}

#[derive(DeriveIden)]
pub enum Subregion {
    Table,
    PlaceId,
    NameStd,
    Code,
    RegionId,
}
