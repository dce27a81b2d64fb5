use crate::server::{
    data::menu_item::MenuItemRepository,
    model::menu_item::{CreateMenuItemParams, MenuItemFilter, UpdateMenuItemParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_ids;
mod get_paginated;
mod update;
