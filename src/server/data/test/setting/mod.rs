use crate::server::{data::setting::SettingRepository, model::setting::UpsertSettingParams};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod delete;
mod upsert;
