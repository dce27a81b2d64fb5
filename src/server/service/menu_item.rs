use sea_orm::DatabaseConnection;

use crate::server::{
    data::{category::CategoryRepository, menu_item::MenuItemRepository},
    error::AppError,
    model::{
        menu_item::{CreateMenuItemParams, MenuItem, MenuItemFilter, UpdateMenuItemParams},
        Page,
    },
    service::validate,
};

pub struct MenuItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuItemService<'a> {
    /// Creates a new MenuItemService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets menu items matching the filter, ordered by name
    pub async fn get_paginated(
        &self,
        filter: MenuItemFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Page<MenuItem>, AppError> {
        let (items, total) = MenuItemRepository::new(self.db)
            .get_paginated(filter, page, per_page)
            .await?;

        Ok(Page {
            items,
            total,
            page,
            per_page,
        })
    }

    /// Gets a menu item by id.
    ///
    /// # Returns
    /// - `Ok(MenuItem)` - Menu item found
    /// - `Err(AppError::NotFound)` - No menu item with that id
    pub async fn get(&self, id: i32) -> Result<MenuItem, AppError> {
        MenuItemRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Menu item not found".to_string()))
    }

    /// Creates a menu item in an existing category
    ///
    /// # Returns
    /// - `Ok(MenuItem)` - Created item
    /// - `Err(AppError::BadRequest)` - Invalid price, counts, or unknown category
    pub async fn create(&self, params: CreateMenuItemParams) -> Result<MenuItem, AppError> {
        let name = validate::required(&params.name, "Name")?;
        validate::positive_amount(params.price, "Price")?;
        Self::check_counts(params.calories, params.preparation_time)?;
        self.check_category(params.category_id).await?;

        Ok(MenuItemRepository::new(self.db)
            .create(CreateMenuItemParams { name, ..params })
            .await?)
    }

    /// Applies a partial update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateMenuItemParams,
    ) -> Result<MenuItem, AppError> {
        let name = params
            .name
            .as_deref()
            .map(|name| validate::required(name, "Name"))
            .transpose()?;
        if let Some(price) = params.price {
            validate::positive_amount(price, "Price")?;
        }
        Self::check_counts(params.calories, params.preparation_time)?;
        if let Some(category_id) = params.category_id {
            self.check_category(category_id).await?;
        }

        MenuItemRepository::new(self.db)
            .update(id, UpdateMenuItemParams { name, ..params })
            .await?
            .ok_or_else(|| AppError::NotFound("Menu item not found".to_string()))
    }

    /// Deletes a menu item; past order lines keep their snapshot
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !MenuItemRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Menu item not found".to_string()));
        }

        Ok(())
    }

    async fn check_category(&self, category_id: i32) -> Result<(), AppError> {
        if CategoryRepository::new(self.db)
            .find_by_id(category_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest("Category not found".to_string()));
        }

        Ok(())
    }

    fn check_counts(calories: Option<i32>, preparation_time: Option<i32>) -> Result<(), AppError> {
        if let Some(calories) = calories {
            validate::non_negative(calories, "Calories")?;
        }
        if let Some(preparation_time) = preparation_time {
            validate::non_negative(preparation_time, "Preparation time")?;
        }

        Ok(())
    }
}
