use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection, Schema,
};

use crate::error::TestError;

pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    /// Opens a fresh in-memory SQLite database with no tables.
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup { db })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    pub async fn with_indexes(&self, stmts: Vec<IndexCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Creates the `place_autocomplete_<lang>` table and its name index for each language.
    pub async fn with_autocomplete_tables(&self, languages: &[&str]) -> Result<(), TestError> {
        for language in languages {
            self.with_tables(vec![entity::autocomplete::create_table_statement(language)])
                .await?;
            self.with_indexes(vec![entity::autocomplete::create_name_index_statement(
                language,
            )])
            .await?;
        }

        Ok(())
    }
}

/// Create statements for every table of the place hierarchy, parents before children.
pub fn place_table_statements() -> Vec<TableCreateStatement> {
    let schema = Schema::new(sea_orm::DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::Place),
        schema.create_table_from_entity(entity::prelude::Continent),
        schema.create_table_from_entity(entity::prelude::Country),
        schema.create_table_from_entity(entity::prelude::CountryNeighbour),
        schema.create_table_from_entity(entity::prelude::Region),
        schema.create_table_from_entity(entity::prelude::Subregion),
        schema.create_table_from_entity(entity::prelude::City),
        schema.create_table_from_entity(entity::prelude::District),
        schema.create_table_from_entity(entity::prelude::PostalCode),
        schema.create_table_from_entity(entity::prelude::AlternativeName),
        schema.create_table_from_entity(entity::prelude::PlaceAlternativeName),
    ]
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Sets up every place table, plus autocomplete tables for the given languages.
#[macro_export]
macro_rules! test_setup_with_place_tables {
    // Pattern 1: No languages provided
    () => {{
        async {
            let setup = TestSetup::new().await?;
            setup
                .with_tables($crate::setup::place_table_statements())
                .await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};

    // Pattern 2: Autocomplete languages provided
    ($($language:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;
            setup
                .with_tables($crate::setup::place_table_statements())
                .await?;
            setup.with_autocomplete_tables(&[$($language,)+]).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
