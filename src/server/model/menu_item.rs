//! Menu item domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::menu::{
        CreateMenuItemDto, MenuItemDto, MenuItemQuery, PaginatedMenuItemsDto, UpdateMenuItemDto,
    },
    server::model::Page,
};

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub is_featured: bool,
    pub calories: Option<i32>,
    /// Minutes.
    pub preparation_time: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl MenuItem {
    pub fn from_entity(entity: entity::menu_item::Model) -> Self {
        Self {
            id: entity.id,
            category_id: entity.category_id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
            image_url: entity.image_url,
            is_available: entity.is_available,
            is_featured: entity.is_featured,
            calories: entity.calories,
            preparation_time: entity.preparation_time,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> MenuItemDto {
        MenuItemDto {
            id: self.id,
            category_id: self.category_id,
            name: self.name,
            description: self.description,
            price: self.price,
            image_url: self.image_url,
            is_available: self.is_available,
            is_featured: self.is_featured,
            calories: self.calories,
            preparation_time: self.preparation_time,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Page<MenuItem> {
    pub fn into_dto(self) -> PaginatedMenuItemsDto {
        let total_pages = self.total_pages();
        PaginatedMenuItemsDto {
            items: self.items.into_iter().map(MenuItem::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages,
        }
    }
}

/// Listing filters. All set filters must match.
#[derive(Debug, Clone, Default)]
pub struct MenuItemFilter {
    pub category_id: Option<i32>,
    pub available_only: bool,
    pub featured_only: bool,
}

impl From<MenuItemQuery> for MenuItemFilter {
    fn from(query: MenuItemQuery) -> Self {
        Self {
            category_id: query.category_id,
            available_only: query.available_only,
            featured_only: query.featured_only,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMenuItemParams {
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub is_featured: bool,
    pub calories: Option<i32>,
    pub preparation_time: Option<i32>,
}

impl From<CreateMenuItemDto> for CreateMenuItemParams {
    fn from(dto: CreateMenuItemDto) -> Self {
        Self {
            category_id: dto.category_id,
            name: dto.name,
            description: dto.description,
            price: dto.price,
            image_url: dto.image_url,
            is_available: dto.is_available,
            is_featured: dto.is_featured,
            calories: dto.calories,
            preparation_time: dto.preparation_time,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateMenuItemParams {
    pub category_id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
    pub is_featured: Option<bool>,
    pub calories: Option<i32>,
    pub preparation_time: Option<i32>,
}

impl From<UpdateMenuItemDto> for UpdateMenuItemParams {
    fn from(dto: UpdateMenuItemDto) -> Self {
        Self {
            category_id: dto.category_id,
            name: dto.name,
            description: dto.description,
            price: dto.price,
            image_url: dto.image_url,
            is_available: dto.is_available,
            is_featured: dto.is_featured,
            calories: dto.calories,
            preparation_time: dto.preparation_time,
        }
    }
}
