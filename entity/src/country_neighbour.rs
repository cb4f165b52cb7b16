use sea_orm::entity::prelude::*;

/// Symmetric neighbour edge between two countries, stored once per direction.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "country_neighbour")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub country_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub neighbour_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
