//! Menu item factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating menu items within an existing category.
///
/// # Example
///
/// ```rust,ignore
/// let item = MenuItemFactory::new(&db, category.id)
///     .name("Jollof Rice")
///     .price(45.0)
///     .featured(true)
///     .build()
///     .await?;
/// ```
pub struct MenuItemFactory<'a> {
    db: &'a DatabaseConnection,
    category_id: i32,
    name: String,
    price: f64,
    is_available: bool,
    is_featured: bool,
}

impl<'a> MenuItemFactory<'a> {
    /// Creates a new MenuItemFactory.
    ///
    /// Defaults:
    /// - name: `"Item {id}"`
    /// - price: `10.00`
    /// - is_available: `true`
    /// - is_featured: `false`
    pub fn new(db: &'a DatabaseConnection, category_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            category_id,
            name: format!("Item {}", id),
            price: 10.0,
            is_available: true,
            is_featured: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn available(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }

    pub fn featured(mut self, is_featured: bool) -> Self {
        self.is_featured = is_featured;
        self
    }

    /// Builds and inserts the menu item.
    pub async fn build(self) -> Result<entity::menu_item::Model, DbErr> {
        entity::menu_item::ActiveModel {
            id: ActiveValue::NotSet,
            category_id: ActiveValue::Set(self.category_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            price: ActiveValue::Set(self.price),
            image_url: ActiveValue::Set(None),
            is_available: ActiveValue::Set(self.is_available),
            is_featured: ActiveValue::Set(self.is_featured),
            calories: ActiveValue::Set(None),
            preparation_time: ActiveValue::Set(Some(15)),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available menu item priced at 10.00 in the given category.
pub async fn create_menu_item(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<entity::menu_item::Model, DbErr> {
    MenuItemFactory::new(db, category_id).build().await
}
