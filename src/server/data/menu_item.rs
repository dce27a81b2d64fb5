//! Menu item repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::menu_item::{
    CreateMenuItemParams, MenuItem, MenuItemFilter, UpdateMenuItemParams,
};

pub struct MenuItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateMenuItemParams) -> Result<MenuItem, DbErr> {
        let entity = entity::menu_item::ActiveModel {
            category_id: ActiveValue::Set(params.category_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            price: ActiveValue::Set(params.price),
            image_url: ActiveValue::Set(params.image_url),
            is_available: ActiveValue::Set(params.is_available),
            is_featured: ActiveValue::Set(params.is_featured),
            calories: ActiveValue::Set(params.calories),
            preparation_time: ActiveValue::Set(params.preparation_time),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MenuItem::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<MenuItem>, DbErr> {
        let entity = entity::prelude::MenuItem::find_by_id(id).one(self.db).await?;

        Ok(entity.map(MenuItem::from_entity))
    }

    /// Fetches every menu item whose id is in `ids`. Missing ids are silently absent.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<MenuItem>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::MenuItem::find()
            .filter(entity::menu_item::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MenuItem::from_entity).collect())
    }

    /// Gets menu items matching the filter, ordered by name.
    pub async fn get_paginated(
        &self,
        filter: MenuItemFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<MenuItem>, u64), DbErr> {
        let mut query = entity::prelude::MenuItem::find();
        if let Some(category_id) = filter.category_id {
            query = query.filter(entity::menu_item::Column::CategoryId.eq(category_id));
        }
        if filter.available_only {
            query = query.filter(entity::menu_item::Column::IsAvailable.eq(true));
        }
        if filter.featured_only {
            query = query.filter(entity::menu_item::Column::IsFeatured.eq(true));
        }

        let paginator = query
            .order_by_asc(entity::menu_item::Column::Name)
            .order_by_asc(entity::menu_item::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((
            entities.into_iter().map(MenuItem::from_entity).collect(),
            total,
        ))
    }

    /// Number of menu items in a category.
    pub async fn count_by_category(&self, category_id: i32) -> Result<u64, DbErr> {
        entity::prelude::MenuItem::find()
            .filter(entity::menu_item::Column::CategoryId.eq(category_id))
            .count(self.db)
            .await
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(MenuItem))` - Updated item
    /// - `Ok(None)` - No item with that id
    pub async fn update(
        &self,
        id: i32,
        params: UpdateMenuItemParams,
    ) -> Result<Option<MenuItem>, DbErr> {
        let Some(entity) = entity::prelude::MenuItem::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::menu_item::ActiveModel = entity.into();
        if let Some(category_id) = params.category_id {
            active.category_id = ActiveValue::Set(category_id);
        }
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(price) = params.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(image_url) = params.image_url {
            active.image_url = ActiveValue::Set(Some(image_url));
        }
        if let Some(is_available) = params.is_available {
            active.is_available = ActiveValue::Set(is_available);
        }
        if let Some(is_featured) = params.is_featured {
            active.is_featured = ActiveValue::Set(is_featured);
        }
        if let Some(calories) = params.calories {
            active.calories = ActiveValue::Set(Some(calories));
        }
        if let Some(preparation_time) = params.preparation_time {
            active.preparation_time = ActiveValue::Set(Some(preparation_time));
        }
        active.updated_at = ActiveValue::Set(Some(Utc::now()));

        let entity = active.update(self.db).await?;

        Ok(Some(MenuItem::from_entity(entity)))
    }

    /// Deletes a menu item, detaching it from past order lines first.
    ///
    /// Order lines keep their name and price snapshot with `menu_item_id` cleared.
    ///
    /// # Returns
    /// - `Ok(true)` - Item deleted
    /// - `Ok(false)` - No item with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::OrderItem::update_many()
            .col_expr(
                entity::order_item::Column::MenuItemId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::order_item::Column::MenuItemId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::MenuItem::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
