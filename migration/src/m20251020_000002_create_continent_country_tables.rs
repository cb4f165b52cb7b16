use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000001_create_place_table::Place;

static IDX_CONTINENT_CODE: &str = "idx-continent-code";
static IDX_COUNTRY_CODE: &str = "idx-country-code";
static IDX_COUNTRY_CONTINENT: &str = "idx-country-continent";
static FK_CONTINENT_PLACE_ID: &str = "fk-continent-place_id";
static FK_COUNTRY_PLACE_ID: &str = "fk-country-place_id";
static FK_COUNTRY_NEIGHBOUR_COUNTRY_ID: &str = "fk-country_neighbour-country_id";
static FK_COUNTRY_NEIGHBOUR_NEIGHBOUR_ID: &str = "fk-country_neighbour-neighbour_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Continent::Table)
                    .if_not_exists()
                    .col(integer(Continent::PlaceId).primary_key())
                    .col(string_len(Continent::Code, 2))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CONTINENT_PLACE_ID)
                            .from(Continent::Table, Continent::PlaceId)
                            .to(Place::Table, Place::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Country::Table)
                    .if_not_exists()
                    .col(integer(Country::PlaceId).primary_key())
                    .col(string_len(Country::Code, 2))
                    .col(string_len(Country::Code3, 3))
                    .col(big_integer(Country::Population))
                    .col(big_integer_null(Country::Area))
                    .col(string_len_null(Country::Currency, 3))
                    .col(string_len_null(Country::CurrencyName, 50))
                    .col(string_len_null(Country::Languages, 250))
                    .col(string_len(Country::Phone, 20))
                    .col(string_len(Country::Continent, 2))
                    .col(string_len(Country::Tld, 5))
                    .col(string_len(Country::Capital, 100))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COUNTRY_PLACE_ID)
                            .from(Country::Table, Country::PlaceId)
                            .to(Place::Table, Place::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CountryNeighbour::Table)
                    .if_not_exists()
                    .col(integer(CountryNeighbour::CountryId))
                    .col(integer(CountryNeighbour::NeighbourId))
                    .primary_key(
                        Index::create()
                            .col(CountryNeighbour::CountryId)
                            .col(CountryNeighbour::NeighbourId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COUNTRY_NEIGHBOUR_COUNTRY_ID)
                            .from(CountryNeighbour::Table, CountryNeighbour::CountryId)
                            .to(Country::Table, Country::PlaceId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COUNTRY_NEIGHBOUR_NEIGHBOUR_ID)
                            .from(CountryNeighbour::Table, CountryNeighbour::NeighbourId)
                            .to(Country::Table, Country::PlaceId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONTINENT_CODE)
                    .table(Continent::Table)
                    .col(Continent::Code)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COUNTRY_CODE)
                    .table(Country::Table)
                    .col(Country::Code)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COUNTRY_CONTINENT)
                    .table(Country::Table)
                    .col(Country::Continent)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CountryNeighbour::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Country::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Continent::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Continent {
    Table,
    PlaceId,
    Code,
}

#[derive(DeriveIden)]
pub enum Country {
    Table,
    PlaceId,
    Code,
    Code3,
    Population,
    Area,
    Currency,
    CurrencyName,
    Languages,
    Phone,
    Continent,
    Tld,
    Capital,
}

#[derive(DeriveIden)]
pub enum CountryNeighbour {
    Table,
    CountryId,
    NeighbourId,
}
