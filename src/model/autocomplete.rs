use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

/// One row of a per-language autocomplete table.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct AutocompleteRow {
    /// Same as the place ID.
    pub id: i32,
    /// Translated full hierarchy, e.g. `Europe, France, Ile-de-France, Paris`.
    pub name: String,
    /// Root-first slug path, e.g. `europe/france/ile-de-france/paris`.
    pub slug: String,
    pub active: bool,
    pub deleted: bool,
    pub ranking: i32,
}

/// How an upsert treats a row that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertMode {
    /// Overwrite every column.
    Full,
    /// Only refresh `name` and `slug`; flags and ranking on an existing row are kept.
    DisplayOnly,
}
