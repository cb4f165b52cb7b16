use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "alternative_name")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Free-form language tag, only the first two characters are significant.
    #[sea_orm(indexed)]
    pub language: String,
    pub is_preferred: bool,
    pub is_short: bool,
    pub is_colloquial: bool,
    pub active: bool,
    pub deleted: bool,
    pub geonames: bool,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
