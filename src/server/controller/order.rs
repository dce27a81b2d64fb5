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
        order::{CreateOrderDto, OrderDto, OrderListQuery, PaginatedOrdersDto, UpdateOrderDto},
    },
    server::{
        data::order::OrderFilter,
        error::AppError,
        middleware::auth::{authorize, AuthGuard, Permission},
        model::order::{CreateOrderParams, UpdateOrderParams},
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Place an order for the logged-in user.
///
/// Prices are copied from the menu at the time of ordering and totals include the
/// configured tax and service charge.
///
/// # Access Control
/// - Any logged-in user
///
/// # Arguments
/// - `payload` - Order type, line items and optional delivery or table details
///
/// # Returns
/// - `201 Created` - The priced order
/// - `400 Bad Request` - No items, bad quantity, unknown or unavailable item, or
///   delivery without an address
#[utoipa::path(
    post,
    path = "/api/v1/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order placed", body = OrderDto),
        (status = 400, description = "Invalid order", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let order = order_service(&state)
        .create(CreateOrderParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// List all orders, newest first.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    get,
    path = "/api/v1/orders",
    tag = ORDER_TAG,
    params(PaginationParams, OrderListQuery),
    responses(
        (status = 200, description = "Page of orders", body = PaginatedOrdersDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationParams>,
    Query(query): Query<OrderListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let filter = OrderFilter {
        customer_id: None,
        status: query.status,
    };
    let orders = order_service(&state)
        .get_paginated(filter, pagination.page, pagination.per_page())
        .await?;

    Ok((StatusCode::OK, Json(orders.into_dto())))
}

/// List the logged-in user's orders, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/orders/my-orders",
    tag = ORDER_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of the user's orders", body = PaginatedOrdersDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_orders(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let filter = OrderFilter {
        customer_id: Some(user.id),
        status: None,
    };
    let orders = order_service(&state)
        .get_paginated(filter, pagination.page, pagination.per_page())
        .await?;

    Ok((StatusCode::OK, Json(orders.into_dto())))
}

/// Get an order with its items.
///
/// # Access Control
/// - The ordering customer, or `Manager`
#[utoipa::path(
    get,
    path = "/api/v1/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order", body = OrderDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Order belongs to another customer", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let order = order_service(&state).get(id).await?;
    authorize(&user, &[Permission::OwnerOrManager(order.customer_id)])?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Update an order's status, payment status, table or ready time.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    put,
    path = "/api/v1/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    request_body = UpdateOrderDto,
    responses(
        (status = 200, description = "Order updated", body = OrderDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let order = order_service(&state)
        .update(id, UpdateOrderParams::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Delete an order with its items and payment.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/v1/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    order_service(&state).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn order_service(state: &AppState) -> OrderService<'_> {
    OrderService::new(&state.db, state.tax_rate, state.service_charge_rate)
}
