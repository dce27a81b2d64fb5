use crate::server::{
    data::category::CategoryRepository,
    model::category::{CreateCategoryParams, UpdateCategoryParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_active_paginated;
mod update;
