use sea_orm::DatabaseConnection;

use crate::server::{
    data::inventory_item::InventoryItemRepository,
    error::AppError,
    model::{
        inventory::{CreateInventoryItemParams, InventoryItem, UpdateInventoryItemParams},
        Page,
    },
    service::validate,
};

pub struct InventoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InventoryService<'a> {
    /// Creates a new InventoryService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists stock items by name, optionally only those at or below par level
    pub async fn get_paginated(
        &self,
        low_stock_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<Page<InventoryItem>, AppError> {
        let (items, total) = InventoryItemRepository::new(self.db)
            .get_paginated(low_stock_only, page, per_page)
            .await?;

        Ok(Page {
            items,
            total,
            page,
            per_page,
        })
    }

    /// Gets an inventory item by id.
    ///
    /// # Returns
    /// - `Ok(InventoryItem)` - Inventory item found
    /// - `Err(AppError::NotFound)` - No inventory item with that id
    pub async fn get(&self, id: i32) -> Result<InventoryItem, AppError> {
        InventoryItemRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Inventory item not found".to_string()))
    }

    /// Adds a stock item
    ///
    /// # Returns
    /// - `Ok(InventoryItem)` - Created item
    /// - `Err(AppError::BadRequest)` - Blank name or SKU, negative cost or counts
    /// - `Err(AppError::Conflict)` - SKU already used by another item
    pub async fn create(
        &self,
        params: CreateInventoryItemParams,
    ) -> Result<InventoryItem, AppError> {
        let name = validate::required(&params.name, "Name")?;
        let sku = validate::required(&params.sku, "SKU")?;
        let category = validate::required(&params.category, "Category")?;
        validate::non_negative_amount(params.unit_cost, "Unit cost")?;
        validate::non_negative(params.quantity_on_hand, "Quantity on hand")?;
        validate::non_negative(params.par_level, "Par level")?;
        self.check_sku(&sku, None).await?;

        Ok(InventoryItemRepository::new(self.db)
            .create(CreateInventoryItemParams {
                name,
                sku,
                category,
                ..params
            })
            .await?)
    }

    /// Applies a partial update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateInventoryItemParams,
    ) -> Result<InventoryItem, AppError> {
        let name = params
            .name
            .as_deref()
            .map(|name| validate::required(name, "Name"))
            .transpose()?;
        let sku = params
            .sku
            .as_deref()
            .map(|sku| validate::required(sku, "SKU"))
            .transpose()?;
        let category = params
            .category
            .as_deref()
            .map(|category| validate::required(category, "Category"))
            .transpose()?;
        if let Some(unit_cost) = params.unit_cost {
            validate::non_negative_amount(unit_cost, "Unit cost")?;
        }
        if let Some(quantity_on_hand) = params.quantity_on_hand {
            validate::non_negative(quantity_on_hand, "Quantity on hand")?;
        }
        if let Some(par_level) = params.par_level {
            validate::non_negative(par_level, "Par level")?;
        }
        if let Some(sku) = &sku {
            self.check_sku(sku, Some(id)).await?;
        }

        InventoryItemRepository::new(self.db)
            .update(
                id,
                UpdateInventoryItemParams {
                    name,
                    sku,
                    category,
                    ..params
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Inventory item not found".to_string()))
    }

    /// Applies a signed stock change; the result never drops below zero
    pub async fn adjust(&self, id: i32, quantity_change: i32) -> Result<InventoryItem, AppError> {
        let item = InventoryItemRepository::new(self.db)
            .adjust_quantity(id, quantity_change)
            .await?
            .ok_or_else(|| AppError::NotFound("Inventory item not found".to_string()))?;

        if item.needs_reorder() {
            tracing::info!(
                "Inventory item {} ({}) is at or below par level: {} on hand, par {}",
                item.id,
                item.sku,
                item.quantity_on_hand,
                item.par_level
            );
        }

        Ok(item)
    }

    /// Deletes an inventory item.
    ///
    /// # Returns
    /// - `Ok(())` - Item deleted
    /// - `Err(AppError::NotFound)` - No item with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !InventoryItemRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Inventory item not found".to_string()));
        }

        Ok(())
    }

    async fn check_sku(&self, sku: &str, current_id: Option<i32>) -> Result<(), AppError> {
        let existing = InventoryItemRepository::new(self.db).find_by_sku(sku).await?;
        if existing.is_some_and(|item| Some(item.id) != current_id) {
            return Err(AppError::Conflict("SKU already in use".to_string()));
        }

        Ok(())
    }
}
