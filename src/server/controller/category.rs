use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginationParams},
        menu::{CategoryDto, CreateCategoryDto, PaginatedCategoriesDto, UpdateCategoryDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::category::{CreateCategoryParams, UpdateCategoryParams},
        service::category::CategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// List active menu categories in display order.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/v1/menu/categories",
    tag = CATEGORY_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of active categories", body = PaginatedCategoriesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let categories = CategoryService::new(&state.db)
        .get_active_paginated(pagination.page, pagination.per_page())
        .await?;

    Ok((StatusCode::OK, Json(categories.into_dto())))
}

/// Get a category by id.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/v1/menu/categories/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category", body = CategoryDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let category = CategoryService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Create a menu category.
///
/// # Access Control
/// - `Manager`
///
/// # Arguments
/// - `payload` - Name, unique slug and optional description
///
/// # Returns
/// - `201 Created` - The new category
/// - `400 Bad Request` - Missing name or slug
/// - `409 Conflict` - Slug already in use
#[utoipa::path(
    post,
    path = "/api/v1/menu/categories",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = CategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Manager])
        .await?;

    let category = CategoryService::new(&state.db)
        .create(CreateCategoryParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

/// Update a menu category.
///
/// # Access Control
/// - `Manager`
#[utoipa::path(
    put,
    path = "/api/v1/menu/categories/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = CategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Manager])
        .await?;

    let category = CategoryService::new(&state.db)
        .update(id, UpdateCategoryParams::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Delete a menu category that has no menu items.
///
/// # Access Control
/// - `Manager`
#[utoipa::path(
    delete,
    path = "/api/v1/menu/categories/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 409, description = "Category still has menu items", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Manager])
        .await?;

    CategoryService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
