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
        menu::{
            CreateMenuItemDto, MenuItemDto, MenuItemQuery, PaginatedMenuItemsDto,
            UpdateMenuItemDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::menu_item::{CreateMenuItemParams, MenuItemFilter, UpdateMenuItemParams},
        service::menu_item::MenuItemService,
        state::AppState,
    },
};

/// Tag for grouping menu item endpoints in OpenAPI documentation
pub static MENU_ITEM_TAG: &str = "menu_item";

/// List menu items.
///
/// Defaults to available items only; `available_only=false` includes the rest.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/v1/menu/items",
    tag = MENU_ITEM_TAG,
    params(PaginationParams, MenuItemQuery),
    responses(
        (status = 200, description = "Page of menu items", body = PaginatedMenuItemsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_menu_items(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(query): Query<MenuItemQuery>,
) -> Result<impl IntoResponse, AppError> {
    let items = MenuItemService::new(&state.db)
        .get_paginated(
            MenuItemFilter::from(query),
            pagination.page,
            pagination.per_page(),
        )
        .await?;

    Ok((StatusCode::OK, Json(items.into_dto())))
}

/// Get a menu item by id.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/v1/menu/items/{id}",
    tag = MENU_ITEM_TAG,
    params(
        ("id" = i32, Path, description = "Menu item ID")
    ),
    responses(
        (status = 200, description = "Menu item", body = MenuItemDto),
        (status = 404, description = "Menu item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_menu_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let item = MenuItemService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Create a menu item.
///
/// # Access Control
/// - `Manager`
///
/// # Arguments
/// - `payload` - Name, price, category and optional dietary details
///
/// # Returns
/// - `201 Created` - The new menu item
/// - `400 Bad Request` - Missing name, invalid price or unknown category
#[utoipa::path(
    post,
    path = "/api/v1/menu/items",
    tag = MENU_ITEM_TAG,
    request_body = CreateMenuItemDto,
    responses(
        (status = 201, description = "Menu item created", body = MenuItemDto),
        (status = 400, description = "Invalid menu item data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_menu_item(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMenuItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Manager])
        .await?;

    let item = MenuItemService::new(&state.db)
        .create(CreateMenuItemParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

/// Update a menu item.
///
/// # Access Control
/// - `Manager`
#[utoipa::path(
    put,
    path = "/api/v1/menu/items/{id}",
    tag = MENU_ITEM_TAG,
    params(
        ("id" = i32, Path, description = "Menu item ID")
    ),
    request_body = UpdateMenuItemDto,
    responses(
        (status = 200, description = "Menu item updated", body = MenuItemDto),
        (status = 400, description = "Invalid menu item data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 404, description = "Menu item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_menu_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMenuItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Manager])
        .await?;

    let item = MenuItemService::new(&state.db)
        .update(id, UpdateMenuItemParams::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Delete a menu item.
///
/// Past order lines keep their copied name and price.
///
/// # Access Control
/// - `Manager`
#[utoipa::path(
    delete,
    path = "/api/v1/menu/items/{id}",
    tag = MENU_ITEM_TAG,
    params(
        ("id" = i32, Path, description = "Menu item ID")
    ),
    responses(
        (status = 204, description = "Menu item deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 404, description = "Menu item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_menu_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Manager])
        .await?;

    MenuItemService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
