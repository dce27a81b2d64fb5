use crate::server::{
    data::inventory_item::InventoryItemRepository,
    model::inventory::{CreateInventoryItemParams, UpdateInventoryItemParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod adjust_quantity;
mod create;
mod get_paginated;
