use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        reservation::{
            AvailabilityRequestDto, AvailabilityResponseDto, ConfirmReservationDto,
            ReservationConfirmationDto, TableDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::availability::{ConfirmReservationParams, Table},
        service::availability::AvailabilityService,
        state::AppState,
    },
};

/// Tag for grouping table availability endpoints in OpenAPI documentation
pub static AVAILABILITY_TAG: &str = "availability";

/// List the restaurant's tables.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/v1/reservations/tables",
    tag = AVAILABILITY_TAG,
    responses(
        (status = 200, description = "All tables", body = Vec<TableDto>)
    ),
)]
pub async fn get_tables(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tables: Vec<TableDto> = AvailabilityService::new(&state.db)
        .tables()
        .into_iter()
        .map(Table::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(tables)))
}

/// Check whether a table is free for a party at a given date and time.
///
/// When nothing fits, up to four alternative evening slots are suggested.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `payload` - Date as `YYYY-MM-DD`, time as `HH:MM` and party size
///
/// # Returns
/// - `200 OK` - The best table, or alternatives
/// - `400 Bad Request` - Malformed date or time, or party size outside 1..=12
#[utoipa::path(
    post,
    path = "/api/v1/reservations/check-availability",
    tag = AVAILABILITY_TAG,
    request_body = AvailabilityRequestDto,
    responses(
        (status = 200, description = "Availability result", body = AvailabilityResponseDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_availability(
    State(state): State<AppState>,
    Json(payload): Json<AvailabilityRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let availability = AvailabilityService::new(&state.db)
        .check(&payload.date, &payload.time, payload.party_size)
        .await?;

    Ok((StatusCode::OK, Json(availability.into_dto())))
}

/// Book a specific table.
///
/// Availability is checked again before the confirmed reservation is created.
///
/// # Access Control
/// - Any logged-in user
///
/// # Returns
/// - `201 Created` - Confirmation with the `RES-` reference
/// - `400 Bad Request` - Unknown table, invalid party size or past date
/// - `409 Conflict` - Table taken or too small for the party
#[utoipa::path(
    post,
    path = "/api/v1/reservations/confirm",
    tag = AVAILABILITY_TAG,
    request_body = ConfirmReservationDto,
    responses(
        (status = 201, description = "Reservation confirmed", body = ReservationConfirmationDto),
        (status = 400, description = "Invalid reservation", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 409, description = "Table is no longer available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_reservation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ConfirmReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let confirmation = AvailabilityService::new(&state.db)
        .confirm(&user, ConfirmReservationParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(confirmation.into_dto())))
}
