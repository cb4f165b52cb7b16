//! Per-language autocomplete tables.
//!
//! Each supported language gets its own `place_autocomplete_<code>` table with an identical
//! layout. The tables are derived data and can be dropped and rebuilt at any time.

use sea_orm::{
    sea_query::{Alias, ColumnDef, Index, IndexCreateStatement, Table, TableCreateStatement},
    DeriveIden,
};

pub const TABLE_PREFIX: &str = "place_autocomplete_";

#[derive(DeriveIden, Clone, Copy, Debug)]
pub enum Autocomplete {
    Id,
    Name,
    Slug,
    Active,
    Deleted,
    Ranking,
}

/// Two-letter code used to name a language's table, lowercased with anything that isn't
/// ASCII alphanumeric dropped, e.g. `pt-BR` -> `pt`.
pub fn language_code(language: &str) -> String {
    language
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(2)
        .collect::<String>()
        .to_ascii_lowercase()
}

pub fn table_name(language: &str) -> String {
    format!("{}{}", TABLE_PREFIX, language_code(language))
}

pub fn table(language: &str) -> Alias {
    Alias::new(table_name(language))
}

pub fn create_table_statement(language: &str) -> TableCreateStatement {
    Table::create()
        .table(table(language))
        .if_not_exists()
        .col(
            ColumnDef::new(Autocomplete::Id)
                .integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(Autocomplete::Name).text().not_null())
        .col(ColumnDef::new(Autocomplete::Slug).text().not_null())
        .col(
            ColumnDef::new(Autocomplete::Active)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(
            ColumnDef::new(Autocomplete::Deleted)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(Autocomplete::Ranking)
                .integer()
                .not_null()
                .default(0),
        )
        .to_owned()
}

pub fn create_name_index_statement(language: &str) -> IndexCreateStatement {
    Index::create()
        .name(format!("idx-{}-name", table_name(language)))
        .table(table(language))
        .col(Autocomplete::Name)
        .if_not_exists()
        .to_owned()
}
