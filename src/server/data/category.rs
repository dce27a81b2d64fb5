//! Menu category repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::category::{Category, CreateCategoryParams, UpdateCategoryParams};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new active category.
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, DbErr> {
        let entity = entity::category::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            slug: ActiveValue::Set(params.slug),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Category::from_entity))
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find()
            .filter(entity::category::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(entity.map(Category::from_entity))
    }

    /// Gets active categories ordered by name.
    ///
    /// # Returns
    /// - `Ok((categories, total))` - Categories for the requested page and total count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_active_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Category>, u64), DbErr> {
        let paginator = entity::prelude::Category::find()
            .filter(entity::category::Column::IsActive.eq(true))
            .order_by_asc(entity::category::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((
            entities.into_iter().map(Category::from_entity).collect(),
            total,
        ))
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Category))` - Updated category
    /// - `Ok(None)` - No category with that id
    pub async fn update(
        &self,
        id: i32,
        params: UpdateCategoryParams,
    ) -> Result<Option<Category>, DbErr> {
        let Some(entity) = entity::prelude::Category::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::category::ActiveModel = entity.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(slug) = params.slug {
            active.slug = ActiveValue::Set(slug);
        }
        if let Some(is_active) = params.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Category::from_entity(entity)))
    }

    /// Deletes a category.
    ///
    /// # Returns
    /// - `Ok(true)` - Category deleted
    /// - `Ok(false)` - No category with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
