use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub slug: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateCategoryDto {
    pub name: String,
    pub description: Option<String>,
    pub slug: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct UpdateCategoryDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct PaginatedCategoriesDto {
    pub categories: Vec<CategoryDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct MenuItemDto {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub is_featured: bool,
    pub calories: Option<i32>,
    /// Preparation time in minutes.
    pub preparation_time: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateMenuItemDto {
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub is_featured: bool,
    pub calories: Option<i32>,
    pub preparation_time: Option<i32>,
}

fn default_true() -> bool {
    true
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct UpdateMenuItemDto {
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

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct PaginatedMenuItemsDto {
    pub items: Vec<MenuItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Filters for listing menu items.
#[derive(Deserialize, IntoParams, Debug, Clone)]
#[into_params(parameter_in = Query)]
pub struct MenuItemQuery {
    /// Only items in this category
    pub category_id: Option<i32>,
    /// Only items currently available (default: true)
    #[serde(default = "default_true")]
    pub available_only: bool,
    /// Only featured items (default: false)
    #[serde(default)]
    pub featured_only: bool,
}
