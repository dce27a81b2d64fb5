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
        inventory::{
            AdjustStockDto, CreateInventoryItemDto, InventoryItemDto, PaginatedInventoryItemsDto,
            UpdateInventoryItemDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::inventory::{CreateInventoryItemParams, UpdateInventoryItemParams},
        service::inventory::InventoryService,
        state::AppState,
    },
};

/// Tag for grouping inventory endpoints in OpenAPI documentation
pub static INVENTORY_TAG: &str = "inventory";

/// List stock items by name.
///
/// # Access Control
/// - `Manager`
#[utoipa::path(
    get,
    path = "/api/v1/inventory",
    tag = INVENTORY_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of stock items", body = PaginatedInventoryItemsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inventory(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    list(state, session, pagination, false).await
}

/// List stock items at or below their par level.
///
/// # Access Control
/// - `Manager`
#[utoipa::path(
    get,
    path = "/api/v1/inventory/low-stock",
    tag = INVENTORY_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of items needing reorder", body = PaginatedInventoryItemsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_low_stock(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    list(state, session, pagination, true).await
}

async fn list(
    state: AppState,
    session: Session,
    pagination: PaginationParams,
    low_stock_only: bool,
) -> Result<(StatusCode, Json<PaginatedInventoryItemsDto>), AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Manager])
        .await?;

    let items = InventoryService::new(&state.db)
        .get_paginated(low_stock_only, pagination.page, pagination.per_page())
        .await?;

    Ok((StatusCode::OK, Json(items.into_dto())))
}

/// Add a stock item.
///
/// # Access Control
/// - `Manager`
///
/// # Arguments
/// - `payload` - Name, unique SKU, category, unit, cost and stock levels
///
/// # Returns
/// - `201 Created` - The new stock item
/// - `400 Bad Request` - Missing field or negative amount
/// - `409 Conflict` - SKU already in use
#[utoipa::path(
    post,
    path = "/api/v1/inventory",
    tag = INVENTORY_TAG,
    request_body = CreateInventoryItemDto,
    responses(
        (status = 201, description = "Stock item created", body = InventoryItemDto),
        (status = 400, description = "Invalid stock item", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 409, description = "SKU already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_inventory_item(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateInventoryItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Manager])
        .await?;

    let item = InventoryService::new(&state.db)
        .create(CreateInventoryItemParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

/// Get a stock item.
///
/// # Access Control
/// - `Manager`
#[utoipa::path(
    get,
    path = "/api/v1/inventory/{id}",
    tag = INVENTORY_TAG,
    params(
        ("id" = i32, Path, description = "Inventory item ID")
    ),
    responses(
        (status = 200, description = "Stock item", body = InventoryItemDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 404, description = "Inventory item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inventory_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Manager])
        .await?;

    let item = InventoryService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Update a stock item.
///
/// # Access Control
/// - `Manager`
#[utoipa::path(
    put,
    path = "/api/v1/inventory/{id}",
    tag = INVENTORY_TAG,
    params(
        ("id" = i32, Path, description = "Inventory item ID")
    ),
    request_body = UpdateInventoryItemDto,
    responses(
        (status = 200, description = "Stock item updated", body = InventoryItemDto),
        (status = 400, description = "Invalid stock item", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 404, description = "Inventory item not found", body = ErrorDto),
        (status = 409, description = "SKU already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_inventory_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateInventoryItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Manager])
        .await?;

    let item = InventoryService::new(&state.db)
        .update(id, UpdateInventoryItemParams::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Delete a stock item.
///
/// # Access Control
/// - `Manager`
#[utoipa::path(
    delete,
    path = "/api/v1/inventory/{id}",
    tag = INVENTORY_TAG,
    params(
        ("id" = i32, Path, description = "Inventory item ID")
    ),
    responses(
        (status = 204, description = "Stock item deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 404, description = "Inventory item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_inventory_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Manager])
        .await?;

    InventoryService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Adjust the quantity on hand by a signed amount.
///
/// Stock never drops below zero.
///
/// # Access Control
/// - `Manager`
#[utoipa::path(
    post,
    path = "/api/v1/inventory/{id}/adjust",
    tag = INVENTORY_TAG,
    params(
        ("id" = i32, Path, description = "Inventory item ID")
    ),
    request_body = AdjustStockDto,
    responses(
        (status = 200, description = "Stock adjusted", body = InventoryItemDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 404, description = "Inventory item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn adjust_stock(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<AdjustStockDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Manager])
        .await?;

    let item = InventoryService::new(&state.db)
        .adjust(id, payload.quantity_change)
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}
