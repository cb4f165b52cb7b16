use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Subtype discriminant stored on every place row.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum PlaceKind {
    #[sea_orm(string_value = "continent")]
    Continent,
    #[sea_orm(string_value = "country")]
    Country,
    #[sea_orm(string_value = "region")]
    Region,
    #[sea_orm(string_value = "subregion")]
    Subregion,
    #[sea_orm(string_value = "city")]
    City,
    #[sea_orm(string_value = "district")]
    District,
    #[sea_orm(string_value = "postal_code")]
    PostalCode,
}

impl PlaceKind {
    /// Human readable name for messages.
    pub fn label(&self) -> &'static str {
        match self {
            PlaceKind::Continent => "continent",
            PlaceKind::Country => "country",
            PlaceKind::Region => "region",
            PlaceKind::Subregion => "subregion",
            PlaceKind::City => "city",
            PlaceKind::District => "district",
            PlaceKind::PostalCode => "postal code",
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "place")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub kind: PlaceKind,
    #[sea_orm(indexed)]
    pub name: String,
    pub slug: String,
    pub ranking: i32,
    pub active: bool,
    pub deleted: bool,
    pub geonames: bool,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
