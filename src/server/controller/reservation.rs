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
        reservation::{
            CreateReservationDto, PaginatedReservationsDto, ReservationDto, UpdateReservationDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{authorize, AuthGuard, Permission},
        model::reservation::{CreateReservationParams, UpdateReservationParams},
        service::reservation::ReservationService,
        state::AppState,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

/// Request a reservation.
///
/// The reservation starts as pending without a table; staff assign one later.
///
/// # Access Control
/// - Any logged-in user
///
/// # Arguments
/// - `payload` - Date and time, party size and optional notes
///
/// # Returns
/// - `201 Created` - The pending reservation
/// - `400 Bad Request` - Party size outside 1..=12 or a date in the past
#[utoipa::path(
    post,
    path = "/api/v1/reservations",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Reservation requested", body = ReservationDto),
        (status = 400, description = "Invalid reservation", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservation = ReservationService::new(&state.db)
        .create(CreateReservationParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}

/// List all reservations, latest date first.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    get,
    path = "/api/v1/reservations",
    tag = RESERVATION_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of reservations", body = PaginatedReservationsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservations(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let reservations = ReservationService::new(&state.db)
        .get_paginated(None, pagination.page, pagination.per_page())
        .await?;

    Ok((StatusCode::OK, Json(reservations.into_dto())))
}

/// List the logged-in user's reservations.
#[utoipa::path(
    get,
    path = "/api/v1/reservations/my-reservations",
    tag = RESERVATION_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of the user's reservations", body = PaginatedReservationsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_reservations(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservations = ReservationService::new(&state.db)
        .get_paginated(Some(user.id), pagination.page, pagination.per_page())
        .await?;

    Ok((StatusCode::OK, Json(reservations.into_dto())))
}

/// Get a reservation.
///
/// # Access Control
/// - The booking customer, or `Manager`
#[utoipa::path(
    get,
    path = "/api/v1/reservations/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation", body = ReservationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Reservation belongs to another customer", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservation = ReservationService::new(&state.db).get(id).await?;
    authorize(&user, &[Permission::OwnerOrManager(reservation.customer_id)])?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Update a reservation.
///
/// Customers may change the date, party size and notes, or cancel. Assigning a table
/// or any other status change requires staff.
///
/// # Access Control
/// - The booking customer, or `Manager`
#[utoipa::path(
    put,
    path = "/api/v1/reservations/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    request_body = UpdateReservationDto,
    responses(
        (status = 200, description = "Reservation updated", body = ReservationDto),
        (status = 400, description = "Invalid reservation", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User may not make this change", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ReservationService::new(&state.db);
    let reservation = service.get(id).await?;
    authorize(&user, &[Permission::OwnerOrManager(reservation.customer_id)])?;

    let updated = service
        .update(id, UpdateReservationParams::from(payload), &user)
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// Delete a reservation.
///
/// # Access Control
/// - The booking customer, or `Manager`
#[utoipa::path(
    delete,
    path = "/api/v1/reservations/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Reservation belongs to another customer", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ReservationService::new(&state.db);
    let reservation = service.get(id).await?;
    authorize(&user, &[Permission::OwnerOrManager(reservation.customer_id)])?;

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
