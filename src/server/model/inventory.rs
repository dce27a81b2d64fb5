//! Inventory domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::inventory::{
        CreateInventoryItemDto, InventoryItemDto, PaginatedInventoryItemsDto,
        UpdateInventoryItemDto,
    },
    server::model::Page,
};

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub id: i32,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub supplier: Option<String>,
    pub unit_cost: f64,
    pub quantity_on_hand: i32,
    /// Reorder threshold.
    pub par_level: i32,
    pub auto_reorder: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl InventoryItem {
    pub fn from_entity(entity: entity::inventory_item::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            sku: entity.sku,
            category: entity.category,
            supplier: entity.supplier,
            unit_cost: entity.unit_cost,
            quantity_on_hand: entity.quantity_on_hand,
            par_level: entity.par_level,
            auto_reorder: entity.auto_reorder,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn needs_reorder(&self) -> bool {
        self.quantity_on_hand <= self.par_level
    }

    pub fn into_dto(self) -> InventoryItemDto {
        InventoryItemDto {
            needs_reorder: self.needs_reorder(),
            id: self.id,
            name: self.name,
            sku: self.sku,
            category: self.category,
            supplier: self.supplier,
            unit_cost: self.unit_cost,
            quantity_on_hand: self.quantity_on_hand,
            par_level: self.par_level,
            auto_reorder: self.auto_reorder,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Page<InventoryItem> {
    pub fn into_dto(self) -> PaginatedInventoryItemsDto {
        let total_pages = self.total_pages();
        PaginatedInventoryItemsDto {
            items: self.items.into_iter().map(InventoryItem::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateInventoryItemParams {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub supplier: Option<String>,
    pub unit_cost: f64,
    pub quantity_on_hand: i32,
    pub par_level: i32,
    pub auto_reorder: bool,
}

impl From<CreateInventoryItemDto> for CreateInventoryItemParams {
    fn from(dto: CreateInventoryItemDto) -> Self {
        Self {
            name: dto.name,
            sku: dto.sku,
            category: dto.category,
            supplier: dto.supplier,
            unit_cost: dto.unit_cost,
            quantity_on_hand: dto.quantity_on_hand,
            par_level: dto.par_level,
            auto_reorder: dto.auto_reorder,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateInventoryItemParams {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub supplier: Option<String>,
    pub unit_cost: Option<f64>,
    pub quantity_on_hand: Option<i32>,
    pub par_level: Option<i32>,
    pub auto_reorder: Option<bool>,
}

impl From<UpdateInventoryItemDto> for UpdateInventoryItemParams {
    fn from(dto: UpdateInventoryItemDto) -> Self {
        Self {
            name: dto.name,
            sku: dto.sku,
            category: dto.category,
            supplier: dto.supplier,
            unit_cost: dto.unit_cost,
            quantity_on_hand: dto.quantity_on_hand,
            par_level: dto.par_level,
            auto_reorder: dto.auto_reorder,
        }
    }
}
