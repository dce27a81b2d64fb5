use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct InventoryItemDto {
    pub id: i32,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub supplier: Option<String>,
    pub unit_cost: f64,
    pub quantity_on_hand: i32,
    pub par_level: i32,
    pub auto_reorder: bool,
    /// True when stock is at or below par level.
    pub needs_reorder: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateInventoryItemDto {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub supplier: Option<String>,
    pub unit_cost: f64,
    #[serde(default)]
    pub quantity_on_hand: i32,
    #[serde(default)]
    pub par_level: i32,
    #[serde(default)]
    pub auto_reorder: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct UpdateInventoryItemDto {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub supplier: Option<String>,
    pub unit_cost: Option<f64>,
    pub quantity_on_hand: Option<i32>,
    pub par_level: Option<i32>,
    pub auto_reorder: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct AdjustStockDto {
    /// Signed change applied to the quantity on hand.
    pub quantity_change: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct PaginatedInventoryItemsDto {
    pub items: Vec<InventoryItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
