//! Inventory item factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating inventory items.
pub struct InventoryItemFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    sku: String,
    category: String,
    unit_cost: f64,
    quantity_on_hand: i32,
    par_level: i32,
}

impl<'a> InventoryItemFactory<'a> {
    /// Creates a new InventoryItemFactory.
    ///
    /// Defaults:
    /// - name: `"Ingredient {id}"`
    /// - sku: `"SKU-{id}"`
    /// - category: `"produce"`
    /// - quantity_on_hand: `50`, par_level: `10`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Ingredient {}", id),
            sku: format!("SKU-{}", id),
            category: "produce".to_string(),
            unit_cost: 2.5,
            quantity_on_hand: 50,
            par_level: 10,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = sku.into();
        self
    }

    /// Sets quantity on hand and par level.
    pub fn stock(mut self, quantity_on_hand: i32, par_level: i32) -> Self {
        self.quantity_on_hand = quantity_on_hand;
        self.par_level = par_level;
        self
    }

    /// Builds and inserts the inventory item.
    pub async fn build(self) -> Result<entity::inventory_item::Model, DbErr> {
        entity::inventory_item::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            sku: ActiveValue::Set(self.sku),
            category: ActiveValue::Set(self.category),
            supplier: ActiveValue::Set(None),
            unit_cost: ActiveValue::Set(self.unit_cost),
            quantity_on_hand: ActiveValue::Set(self.quantity_on_hand),
            par_level: ActiveValue::Set(self.par_level),
            auto_reorder: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a well-stocked inventory item.
pub async fn create_inventory_item(
    db: &DatabaseConnection,
) -> Result<entity::inventory_item::Model, DbErr> {
    InventoryItemFactory::new(db).build().await
}
