//! Declarative test builder.
//!
//! Queues tables to create and fixtures to insert, executed in order by `build()`.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, setup::place_table_statements, TestSetup};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_place_tables: bool,
    autocomplete_languages: Vec<String>,
    continents: Vec<(String, String)>, // (code, name)
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_place_tables: false,
            autocomplete_languages: Vec::new(),
            continents: Vec::new(),
        }
    }

    /// Add every place hierarchy and alternative name table.
    pub fn with_place_tables(mut self) -> Self {
        self.include_place_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use placetree_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), placetree_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Place)
    ///     .with_table(Continent)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Add the autocomplete table of a language.
    pub fn with_autocomplete_table(mut self, language: &str) -> Self {
        self.autocomplete_languages.push(language.to_string());
        self
    }

    /// Insert a continent. Requires the place tables.
    pub fn with_continent(mut self, code: &str, name: &str) -> Self {
        self.continents.push((code.to_string(), name.to_string()));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Test database ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let setup = TestSetup::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();
        if self.include_place_tables {
            all_tables.extend(place_table_statements());
        }
        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        let languages: Vec<&str> = self
            .autocomplete_languages
            .iter()
            .map(String::as_str)
            .collect();
        setup.with_autocomplete_tables(&languages).await?;

        // 2. Insert database fixtures
        for (code, name) in self.continents {
            setup.places().insert_continent(&code, &name).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
