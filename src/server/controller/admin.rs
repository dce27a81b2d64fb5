use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        admin::{DashboardDto, DaysQuery, LimitQuery, PopularItemDto, SalesDayDto},
        api::{ErrorDto, PaginationParams},
        order::OrderDto,
        reservation::ReservationDto,
        user::{PaginatedUsersDto, UpdateRoleDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            order::Order,
            report::{PopularItem, SalesDay},
            reservation::Reservation,
        },
        service::{report::ReportService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Restaurant totals for orders, revenue, reservations and users.
///
/// "Today" is the current UTC day. Revenue only counts paid orders.
///
/// # Access Control
/// - `Manager`
#[utoipa::path(
    get,
    path = "/api/v1/admin/dashboard",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Manager])
        .await?;

    let dashboard = ReportService::new(&state.db).dashboard().await?;

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}

/// Most recently placed orders.
///
/// # Access Control
/// - `Manager`
#[utoipa::path(
    get,
    path = "/api/v1/admin/recent-orders",
    tag = ADMIN_TAG,
    params(LimitQuery),
    responses(
        (status = 200, description = "Recent orders", body = Vec<OrderDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recent_orders(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<LimitQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Manager])
        .await?;

    let orders: Vec<OrderDto> = ReportService::new(&state.db)
        .recent_orders(query.limit)
        .await?
        .into_iter()
        .map(Order::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(orders)))
}

/// Most recently made reservations.
///
/// # Access Control
/// - `Manager`
#[utoipa::path(
    get,
    path = "/api/v1/admin/recent-reservations",
    tag = ADMIN_TAG,
    params(LimitQuery),
    responses(
        (status = 200, description = "Recent reservations", body = Vec<ReservationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recent_reservations(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<LimitQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Manager])
        .await?;

    let reservations: Vec<ReservationDto> = ReportService::new(&state.db)
        .recent_reservations(query.limit)
        .await?
        .into_iter()
        .map(Reservation::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(reservations)))
}

/// Menu items ranked by total quantity ordered.
///
/// # Access Control
/// - `Manager`
#[utoipa::path(
    get,
    path = "/api/v1/admin/popular-items",
    tag = ADMIN_TAG,
    params(LimitQuery),
    responses(
        (status = 200, description = "Popular items", body = Vec<PopularItemDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_popular_items(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<LimitQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Manager])
        .await?;

    let items: Vec<PopularItemDto> = ReportService::new(&state.db)
        .popular_items(query.limit)
        .await?
        .into_iter()
        .map(PopularItem::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(items)))
}

/// Paid order count and revenue per day.
///
/// # Access Control
/// - `Manager`
#[utoipa::path(
    get,
    path = "/api/v1/admin/sales-analytics",
    tag = ADMIN_TAG,
    params(DaysQuery),
    responses(
        (status = 200, description = "Sales per day, oldest first", body = Vec<SalesDayDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sales_analytics(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<DaysQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Manager])
        .await?;

    let days: Vec<SalesDayDto> = ReportService::new(&state.db)
        .sales_analytics(query.days)
        .await?
        .into_iter()
        .map(SalesDay::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(days)))
}

/// List all accounts.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/v1/admin/users",
    tag = ADMIN_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of users", body = PaginatedUsersDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_users(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .get_paginated(pagination.page, pagination.per_page())
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Activate or deactivate an account.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Account with its new active flag
/// - `400 Bad Request` - Admin tried to deactivate themselves
/// - `404 Not Found` - No user with that id
#[utoipa::path(
    put,
    path = "/api/v1/admin/users/{id}/toggle-active",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Active flag toggled", body = UserDto),
        (status = 400, description = "Cannot deactivate own account", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_user_active(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .toggle_active(admin.id, id)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Change an account's role.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Account with its new role
/// - `400 Bad Request` - Admin tried to demote themselves
/// - `404 Not Found` - No user with that id
#[utoipa::path(
    put,
    path = "/api/v1/admin/users/{id}/role",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Role updated", body = UserDto),
        (status = 400, description = "Cannot demote own account", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_user_role(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .set_role(admin.id, id, payload.role)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
