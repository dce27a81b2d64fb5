use sea_orm::DatabaseConnection;

use crate::server::{
    data::setting::SettingRepository,
    error::AppError,
    model::setting::{Setting, UpsertSettingParams},
    service::validate,
};

pub struct SettingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Setting>, AppError> {
        Ok(SettingRepository::new(self.db).get_all().await?)
    }

    /// Creates the setting or replaces its value and description
    pub async fn upsert(&self, params: UpsertSettingParams) -> Result<Setting, AppError> {
        let key = validate::required(&params.key, "Key")?;

        let setting = SettingRepository::new(self.db)
            .upsert(UpsertSettingParams { key, ..params })
            .await?;

        tracing::info!("Setting {} updated", setting.key);

        Ok(setting)
    }

    pub async fn delete(&self, key: &str) -> Result<(), AppError> {
        if !SettingRepository::new(self.db).delete(key).await? {
            return Err(AppError::NotFound("Setting not found".to_string()));
        }

        Ok(())
    }
}
