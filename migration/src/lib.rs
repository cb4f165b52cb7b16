pub use sea_orm_migration::prelude::*;

mod m20251020_000001_create_place_table;
mod m20251020_000002_create_continent_country_tables;
mod m20251020_000003_create_region_tables;
mod m20251020_000004_create_city_tables;
mod m20251020_000005_create_alternative_name_tables;
mod m20251020_000006_create_autocomplete_tables;

pub use m20251020_000006_create_autocomplete_tables::AUTOCOMPLETE_LANGUAGES;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_create_place_table::Migration),
            Box::new(m20251020_000002_create_continent_country_tables::Migration),
            Box::new(m20251020_000003_create_region_tables::Migration),
            Box::new(m20251020_000004_create_city_tables::Migration),
            Box::new(m20251020_000005_create_alternative_name_tables::Migration),
            Box::new(m20251020_000006_create_autocomplete_tables::Migration),
        ]
    }
}
