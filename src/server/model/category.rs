//! Menu category domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::menu::{CategoryDto, CreateCategoryDto, PaginatedCategoriesDto, UpdateCategoryDto},
    server::model::Page,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// URL-safe unique identifier.
    pub slug: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            slug: entity.slug,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            description: self.description,
            slug: self.slug,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

impl Page<Category> {
    pub fn into_dto(self) -> PaginatedCategoriesDto {
        let total_pages = self.total_pages();
        PaginatedCategoriesDto {
            categories: self.items.into_iter().map(Category::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub name: String,
    pub description: Option<String>,
    pub slug: String,
}

impl From<CreateCategoryDto> for CreateCategoryParams {
    fn from(dto: CreateCategoryDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            slug: dto.slug,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCategoryParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub is_active: Option<bool>,
}

impl From<UpdateCategoryDto> for UpdateCategoryParams {
    fn from(dto: UpdateCategoryDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            slug: dto.slug,
            is_active: dto.is_active,
        }
    }
}
