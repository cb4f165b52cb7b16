use entity::autocomplete::{self, Autocomplete};
use migration::{
    Expr, ExprTrait, Func, LikeExpr, OnConflict, Order, Query, SchemaManager, SelectStatement,
};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, FromQueryResult};

use crate::model::autocomplete::{AutocompleteRow, UpsertMode};

const COLUMNS: [Autocomplete; 6] = [
    Autocomplete::Id,
    Autocomplete::Name,
    Autocomplete::Slug,
    Autocomplete::Active,
    Autocomplete::Deleted,
    Autocomplete::Ranking,
];

/// Read and write access to the per-language `place_autocomplete_<lang>` tables.
///
/// Table names are derived through [`autocomplete::table`], which reduces the language to
/// two ASCII alphanumerics, so no caller-provided text reaches the SQL unescaped.
pub struct AutocompleteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AutocompleteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn has_table(&self, language: &str) -> Result<bool, DbErr> {
        SchemaManager::new(self.db)
            .has_table(autocomplete::table_name(language))
            .await
    }

    /// Inserts or updates rows in a single statement.
    ///
    /// # Arguments
    /// - `language`: Language whose table is written to
    /// - `rows`: Rows to write, keyed by place ID
    /// - `mode`: Which columns an existing row gets overwritten with
    ///
    /// # Notes
    /// - Callers are responsible for chunking large inputs
    pub async fn upsert_many(
        &self,
        language: &str,
        rows: &[AutocompleteRow],
        mode: UpsertMode,
    ) -> Result<(), DbErr> {
        if rows.is_empty() {
            return Ok(());
        }

        let mut insert = Query::insert();
        insert
            .into_table(autocomplete::table(language))
            .columns(COLUMNS);

        for row in rows {
            insert
                .values([
                    row.id.into(),
                    row.name.clone().into(),
                    row.slug.clone().into(),
                    row.active.into(),
                    row.deleted.into(),
                    row.ranking.into(),
                ])
                .map_err(|e| DbErr::Custom(e.to_string()))?;
        }

        let on_conflict = match mode {
            UpsertMode::Full => OnConflict::column(Autocomplete::Id)
                .update_columns([
                    Autocomplete::Name,
                    Autocomplete::Slug,
                    Autocomplete::Active,
                    Autocomplete::Deleted,
                    Autocomplete::Ranking,
                ])
                .to_owned(),
            UpsertMode::DisplayOnly => OnConflict::column(Autocomplete::Id)
                .update_columns([Autocomplete::Name, Autocomplete::Slug])
                .to_owned(),
        };
        insert.on_conflict(on_conflict);

        self.db.execute(&insert).await?;

        Ok(())
    }

    pub async fn find(&self, language: &str, id: i32) -> Result<Option<AutocompleteRow>, DbErr> {
        let select = select_rows(language)
            .and_where(Expr::col(Autocomplete::Id).eq(id))
            .to_owned();

        AutocompleteRow::find_by_statement(self.db.get_database_backend().build(&select))
            .one(self.db)
            .await
    }

    /// Every row of a language's table ordered by ID.
    pub async fn all(&self, language: &str) -> Result<Vec<AutocompleteRow>, DbErr> {
        let select = select_rows(language)
            .order_by(Autocomplete::Id, Order::Asc)
            .to_owned();

        AutocompleteRow::find_by_statement(self.db.get_database_backend().build(&select))
            .all(self.db)
            .await
    }

    /// Visible rows whose full name starts with `prefix`, case-insensitively, highest
    /// ranking first.
    pub async fn search_prefix(
        &self,
        language: &str,
        prefix: &str,
        limit: u64,
    ) -> Result<Vec<AutocompleteRow>, DbErr> {
        let pattern = format!("{}%", escape_like(&prefix.to_lowercase()));

        let select = select_rows(language)
            .and_where(
                Func::lower(Expr::col(Autocomplete::Name))
                    .like(LikeExpr::new(pattern).escape('\\')),
            )
            .and_where(Expr::col(Autocomplete::Active).eq(true))
            .and_where(Expr::col(Autocomplete::Deleted).eq(false))
            .order_by(Autocomplete::Ranking, Order::Desc)
            .order_by(Autocomplete::Name, Order::Asc)
            .limit(limit)
            .to_owned();

        AutocompleteRow::find_by_statement(self.db.get_database_backend().build(&select))
            .all(self.db)
            .await
    }
}

fn select_rows(language: &str) -> SelectStatement {
    Query::select()
        .columns(COLUMNS)
        .from(autocomplete::table(language))
        .to_owned()
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
