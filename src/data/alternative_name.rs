use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::model::alternative_name::{AlternativeName, NewAlternativeName};

pub struct AlternativeNameRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AlternativeNameRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: NewAlternativeName) -> Result<AlternativeName, DbErr> {
        let model = entity::alternative_name::ActiveModel {
            name: ActiveValue::Set(name.name),
            language: ActiveValue::Set(name.language),
            is_preferred: ActiveValue::Set(name.is_preferred),
            is_short: ActiveValue::Set(name.is_short),
            is_colloquial: ActiveValue::Set(name.is_colloquial),
            active: ActiveValue::Set(name.active),
            deleted: ActiveValue::Set(false),
            geonames: ActiveValue::Set(name.geonames),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(model.into())
    }

    pub async fn get(&self, id: i32) -> Result<Option<AlternativeName>, DbErr> {
        Ok(entity::prelude::AlternativeName::find_by_id(id)
            .one(self.db)
            .await?
            .map(AlternativeName::from))
    }

    pub async fn update(&self, name: &AlternativeName) -> Result<AlternativeName, DbErr> {
        let model = entity::alternative_name::ActiveModel {
            id: ActiveValue::Unchanged(name.id),
            name: ActiveValue::Set(name.name.clone()),
            language: ActiveValue::Set(name.language.clone()),
            is_preferred: ActiveValue::Set(name.is_preferred),
            is_short: ActiveValue::Set(name.is_short),
            is_colloquial: ActiveValue::Set(name.is_colloquial),
            active: ActiveValue::Set(name.active),
            deleted: ActiveValue::Set(name.deleted),
            geonames: ActiveValue::Set(name.geonames),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        }
        .update(self.db)
        .await?;

        Ok(model.into())
    }

    /// All alternative names attached to a place, including inactive and deleted ones,
    /// ordered by ID.
    pub async fn find_for_place(&self, place_id: i32) -> Result<Vec<AlternativeName>, DbErr> {
        let ids = self.ids_for_place(place_id).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let names = entity::prelude::AlternativeName::find()
            .filter(entity::alternative_name::Column::Id.is_in(ids))
            .order_by_asc(entity::alternative_name::Column::Id)
            .all(self.db)
            .await?;

        Ok(names.into_iter().map(AlternativeName::from).collect())
    }

    /// IDs of the places an alternative name is attached to, ordered by ID.
    pub async fn owner_ids(&self, alternative_name_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::PlaceAlternativeName::find()
            .select_only()
            .column(entity::place_alternative_name::Column::PlaceId)
            .filter(
                entity::place_alternative_name::Column::AlternativeNameId.eq(alternative_name_id),
            )
            .order_by_asc(entity::place_alternative_name::Column::PlaceId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Links an alternative name to a place. Linking an existing pair is a no-op.
    pub async fn associate(&self, place_id: i32, alternative_name_id: i32) -> Result<(), DbErr> {
        let link = entity::place_alternative_name::ActiveModel {
            place_id: ActiveValue::Set(place_id),
            alternative_name_id: ActiveValue::Set(alternative_name_id),
        };

        entity::prelude::PlaceAlternativeName::insert(link)
            .on_conflict(
                OnConflict::columns([
                    entity::place_alternative_name::Column::PlaceId,
                    entity::place_alternative_name::Column::AlternativeNameId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Removes a link, returning whether it existed.
    pub async fn disassociate(
        &self,
        place_id: i32,
        alternative_name_id: i32,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::PlaceAlternativeName::delete_many()
            .filter(entity::place_alternative_name::Column::PlaceId.eq(place_id))
            .filter(
                entity::place_alternative_name::Column::AlternativeNameId.eq(alternative_name_id),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn ids_for_place(&self, place_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::PlaceAlternativeName::find()
            .select_only()
            .column(entity::place_alternative_name::Column::AlternativeNameId)
            .filter(entity::place_alternative_name::Column::PlaceId.eq(place_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
