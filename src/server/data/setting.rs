//! Restaurant settings repository.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::setting::{Setting, UpsertSettingParams};

pub struct SettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All settings ordered by key.
    pub async fn get_all(&self) -> Result<Vec<Setting>, DbErr> {
        let entities = entity::prelude::Setting::find()
            .order_by_asc(entity::setting::Column::Key)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Setting::from_entity).collect())
    }

    pub async fn find_by_key(&self, key: &str) -> Result<Option<Setting>, DbErr> {
        let entity = entity::prelude::Setting::find()
            .filter(entity::setting::Column::Key.eq(key))
            .one(self.db)
            .await?;

        Ok(entity.map(Setting::from_entity))
    }

    /// Creates or replaces the setting stored under `params.key`.
    ///
    /// On conflict the value, description and update time are overwritten while the
    /// original creation time is kept.
    pub async fn upsert(&self, params: UpsertSettingParams) -> Result<Setting, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::Setting::insert(entity::setting::ActiveModel {
            key: ActiveValue::Set(params.key),
            value: ActiveValue::Set(params.value),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(Some(now)),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::setting::Column::Key)
                .update_columns([
                    entity::setting::Column::Value,
                    entity::setting::Column::Description,
                    entity::setting::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Setting::from_entity(entity))
    }

    pub async fn delete(&self, key: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Setting::delete_many()
            .filter(entity::setting::Column::Key.eq(key))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
