use crate::{
    model::user::UserRole,
    server::{
        data::user::UserRepository,
        error::AppError,
        model::user::{CreateUserParams, UpdateProfileParams},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod find_by_email;
mod get_all_paginated;
mod set_active;
mod set_role;
mod update_profile;
