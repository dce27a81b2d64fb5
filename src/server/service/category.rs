use sea_orm::DatabaseConnection;

use crate::server::{
    data::{category::CategoryRepository, menu_item::MenuItemRepository},
    error::AppError,
    model::{
        category::{Category, CreateCategoryParams, UpdateCategoryParams},
        Page,
    },
    service::validate,
    util::validate::is_valid_slug,
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    /// Creates a new CategoryService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets active categories ordered by name
    pub async fn get_active_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Category>, AppError> {
        let (categories, total) = CategoryRepository::new(self.db)
            .get_active_paginated(page, per_page)
            .await?;

        Ok(Page {
            items: categories,
            total,
            page,
            per_page,
        })
    }

    /// Gets a category by id.
    ///
    /// # Returns
    /// - `Ok(Category)` - Category found
    /// - `Err(AppError::NotFound)` - No category with that id
    pub async fn get(&self, id: i32) -> Result<Category, AppError> {
        CategoryRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
    }

    /// Creates a category after checking the name and slug
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);

        let name = validate::required(&params.name, "Name")?;
        let slug = self.check_slug(&repo, &params.slug, None).await?;

        Ok(repo
            .create(CreateCategoryParams {
                name,
                description: params.description,
                slug,
            })
            .await?)
    }

    /// Applies a partial update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateCategoryParams,
    ) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);

        let name = params
            .name
            .as_deref()
            .map(|name| validate::required(name, "Name"))
            .transpose()?;
        let slug = match params.slug.as_deref() {
            Some(slug) => Some(self.check_slug(&repo, slug, Some(id)).await?),
            None => None,
        };

        repo.update(
            id,
            UpdateCategoryParams {
                name,
                slug,
                ..params
            },
        )
        .await?
        .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
    }

    /// Deletes a category that no menu item references
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = CategoryRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Category not found".to_string()));
        }

        let item_count = MenuItemRepository::new(self.db)
            .count_by_category(id)
            .await?;
        if item_count > 0 {
            return Err(AppError::Conflict(format!(
                "Category still has {item_count} menu item(s)"
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }

    /// Validates slug format and uniqueness, ignoring the category being updated.
    async fn check_slug(
        &self,
        repo: &CategoryRepository<'_>,
        slug: &str,
        current_id: Option<i32>,
    ) -> Result<String, AppError> {
        let slug = slug.trim();
        if !is_valid_slug(slug) {
            return Err(AppError::BadRequest(
                "Slug may only contain lower-case letters, digits and dashes".to_string(),
            ));
        }

        if let Some(existing) = repo.find_by_slug(slug).await? {
            if Some(existing.id) != current_id {
                return Err(AppError::Conflict("Slug already in use".to_string()));
            }
        }

        Ok(slug.to_string())
    }
}
