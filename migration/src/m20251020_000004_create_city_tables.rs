use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251020_000001_create_place_table::Place,
    m20251020_000002_create_continent_country_tables::Country,
    m20251020_000003_create_region_tables::{Region, Subregion},
};

static IDX_CITY_REGION_ID: &str = "idx-city-region_id";
static IDX_CITY_COUNTRY_ID: &str = "idx-city-country_id";
static IDX_DISTRICT_CITY_ID: &str = "idx-district-city_id";
static IDX_POSTAL_CODE_COUNTRY_ID: &str = "idx-postal_code-country_id";
static FK_CITY_PLACE_ID: &str = "fk-city-place_id";
static FK_CITY_REGION_ID: &str = "fk-city-region_id";
static FK_CITY_SUBREGION_ID: &str = "fk-city-subregion_id";
static FK_CITY_COUNTRY_ID: &str = "fk-city-country_id";
static FK_DISTRICT_PLACE_ID: &str = "fk-district-place_id";
static FK_DISTRICT_CITY_ID: &str = "fk-district-city_id";
static FK_POSTAL_CODE_PLACE_ID: &str = "fk-postal_code-place_id";
static FK_POSTAL_CODE_COUNTRY_ID: &str = "fk-postal_code-country_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(City::Table)
                    .if_not_exists()
                    .col(integer(City::PlaceId).primary_key())
                    .col(string_len(City::NameStd, 200))
                    .col(double(City::Latitude))
                    .col(double(City::Longitude))
                    .col(big_integer(City::Population))
                    .col(integer_null(City::RegionId))
                    .col(integer_null(City::SubregionId))
                    .col(integer(City::CountryId))
                    .col(integer_null(City::Elevation))
                    .col(string_len(City::FeatureCode, 10))
                    .col(string_len(City::Timezone, 40))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CITY_PLACE_ID)
                            .from(City::Table, City::PlaceId)
                            .to(Place::Table, Place::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CITY_REGION_ID)
                            .from(City::Table, City::RegionId)
                            .to(Region::Table, Region::PlaceId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CITY_SUBREGION_ID)
                            .from(City::Table, City::SubregionId)
                            .to(Subregion::Table, Subregion::PlaceId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CITY_COUNTRY_ID)
                            .from(City::Table, City::CountryId)
                            .to(Country::Table, Country::PlaceId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(District::Table)
                    .if_not_exists()
                    .col(integer(District::PlaceId).primary_key())
                    .col(string_len(District::NameStd, 200))
                    .col(double(District::Latitude))
                    .col(double(District::Longitude))
                    .col(big_integer(District::Population))
                    .col(integer(District::CityId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DISTRICT_PLACE_ID)
                            .from(District::Table, District::PlaceId)
                            .to(Place::Table, Place::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DISTRICT_CITY_ID)
                            .from(District::Table, District::CityId)
                            .to(City::Table, City::PlaceId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PostalCode::Table)
                    .if_not_exists()
                    .col(integer(PostalCode::PlaceId).primary_key())
                    .col(string_len(PostalCode::Code, 20))
                    .col(double(PostalCode::Latitude))
                    .col(double(PostalCode::Longitude))
                    .col(integer(PostalCode::CountryId))
                    .col(string_len_null(PostalCode::RegionName, 100))
                    .col(string_len_null(PostalCode::SubregionName, 100))
                    .col(string_len_null(PostalCode::DistrictName, 100))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_POSTAL_CODE_PLACE_ID)
                            .from(PostalCode::Table, PostalCode::PlaceId)
                            .to(Place::Table, Place::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_POSTAL_CODE_COUNTRY_ID)
                            .from(PostalCode::Table, PostalCode::CountryId)
                            .to(Country::Table, Country::PlaceId),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, table, col) in [
            (IDX_CITY_REGION_ID, City::Table, City::RegionId),
            (IDX_CITY_COUNTRY_ID, City::Table, City::CountryId),
        ] {
            manager
                .create_index(Index::create().name(name).table(table).col(col).to_owned())
                .await?;
        }

        manager
            .create_index(
                Index::create()
                    .name(IDX_DISTRICT_CITY_ID)
                    .table(District::Table)
                    .col(District::CityId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_POSTAL_CODE_COUNTRY_ID)
                    .table(PostalCode::Table)
                    .col(PostalCode::CountryId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PostalCode::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(District::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(City::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum City {
    Table,
    PlaceId,
    NameStd,
    Latitude,
    Longitude,
    Population,
    RegionId,
    SubregionId,
    CountryId,
    Elevation,
    FeatureCode,
    Timezone,
}

#[derive(DeriveIden)]
pub enum District {
    Table,
    PlaceId,
    NameStd,
    Latitude,
    Longitude,
    Population,
    CityId,
}

#[derive(DeriveIden)]
pub enum PostalCode {
    Table,
    PlaceId,
    Code,
    Latitude,
    Longitude,
    CountryId,
    RegionName,
    SubregionName,
    DistrictName,
}
