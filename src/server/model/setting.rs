use chrono::{DateTime, Utc};

use crate::model::setting::{SettingDto, UpsertSettingDto};

/// A key/value restaurant setting editable by admins.
#[derive(Debug, Clone, PartialEq)]
pub struct Setting {
    pub key: String,
    pub value: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Setting {
    pub fn from_entity(entity: entity::setting::Model) -> Self {
        Self {
            key: entity.key,
            value: entity.value,
            description: entity.description,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> SettingDto {
        SettingDto {
            key: self.key,
            value: self.value,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertSettingParams {
    pub key: String,
    pub value: String,
    pub description: Option<String>,
}

impl UpsertSettingParams {
    pub fn from_dto(key: String, dto: UpsertSettingDto) -> Self {
        Self {
            key,
            value: dto.value,
            description: dto.description,
        }
    }
}
