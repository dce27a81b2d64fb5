//! Inventory item repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::inventory::{
    CreateInventoryItemParams, InventoryItem, UpdateInventoryItemParams,
};

pub struct InventoryItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InventoryItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateInventoryItemParams) -> Result<InventoryItem, DbErr> {
        let entity = entity::inventory_item::ActiveModel {
            name: ActiveValue::Set(params.name),
            sku: ActiveValue::Set(params.sku),
            category: ActiveValue::Set(params.category),
            supplier: ActiveValue::Set(params.supplier),
            unit_cost: ActiveValue::Set(params.unit_cost),
            quantity_on_hand: ActiveValue::Set(params.quantity_on_hand),
            par_level: ActiveValue::Set(params.par_level),
            auto_reorder: ActiveValue::Set(params.auto_reorder),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(InventoryItem::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<InventoryItem>, DbErr> {
        let entity = entity::prelude::InventoryItem::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(InventoryItem::from_entity))
    }

    pub async fn find_by_sku(&self, sku: &str) -> Result<Option<InventoryItem>, DbErr> {
        let entity = entity::prelude::InventoryItem::find()
            .filter(entity::inventory_item::Column::Sku.eq(sku))
            .one(self.db)
            .await?;

        Ok(entity.map(InventoryItem::from_entity))
    }

    /// Lists inventory ordered by name.
    ///
    /// # Arguments
    /// - `low_stock_only` - Only items at or below their par level
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of items per page
    pub async fn get_paginated(
        &self,
        low_stock_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<InventoryItem>, u64), DbErr> {
        let mut query = entity::prelude::InventoryItem::find();
        if low_stock_only {
            use sea_orm::ExprTrait;

            query = query.filter(
                Expr::col(entity::inventory_item::Column::QuantityOnHand)
                    .lte(Expr::col(entity::inventory_item::Column::ParLevel)),
            );
        }

        let paginator = query
            .order_by_asc(entity::inventory_item::Column::Name)
            .order_by_asc(entity::inventory_item::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((
            entities.into_iter().map(InventoryItem::from_entity).collect(),
            total,
        ))
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(InventoryItem))` - Updated item
    /// - `Ok(None)` - No item with that id
    pub async fn update(
        &self,
        id: i32,
        params: UpdateInventoryItemParams,
    ) -> Result<Option<InventoryItem>, DbErr> {
        let Some(entity) = entity::prelude::InventoryItem::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::inventory_item::ActiveModel = entity.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(sku) = params.sku {
            active.sku = ActiveValue::Set(sku);
        }
        if let Some(category) = params.category {
            active.category = ActiveValue::Set(category);
        }
        if let Some(supplier) = params.supplier {
            active.supplier = ActiveValue::Set(Some(supplier));
        }
        if let Some(unit_cost) = params.unit_cost {
            active.unit_cost = ActiveValue::Set(unit_cost);
        }
        if let Some(quantity_on_hand) = params.quantity_on_hand {
            active.quantity_on_hand = ActiveValue::Set(quantity_on_hand);
        }
        if let Some(par_level) = params.par_level {
            active.par_level = ActiveValue::Set(par_level);
        }
        if let Some(auto_reorder) = params.auto_reorder {
            active.auto_reorder = ActiveValue::Set(auto_reorder);
        }
        active.updated_at = ActiveValue::Set(Some(Utc::now()));

        let entity = active.update(self.db).await?;

        Ok(Some(InventoryItem::from_entity(entity)))
    }

    /// Adds `quantity_change` to the stock on hand, clamping the result at zero.
    ///
    /// # Returns
    /// - `Ok(Some(InventoryItem))` - Item with its new stock level
    /// - `Ok(None)` - No item with that id
    pub async fn adjust_quantity(
        &self,
        id: i32,
        quantity_change: i32,
    ) -> Result<Option<InventoryItem>, DbErr> {
        let Some(entity) = entity::prelude::InventoryItem::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let quantity = entity
            .quantity_on_hand
            .saturating_add(quantity_change)
            .max(0);

        let mut active: entity::inventory_item::ActiveModel = entity.into();
        active.quantity_on_hand = ActiveValue::Set(quantity);
        active.updated_at = ActiveValue::Set(Some(Utc::now()));

        let entity = active.update(self.db).await?;

        Ok(Some(InventoryItem::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::InventoryItem::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
