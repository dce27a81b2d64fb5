use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, LoginResponseDto, RegisterDto, UserDto},
    },
    server::{
        error::AppError, middleware::session::AuthSession, model::user::RegisterParams,
        service::auth::AuthService, state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates a customer account, or an admin account when the one-time admin code printed
/// at startup is supplied. Registering does not log the user in.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection and admin code service
/// - `payload` - Email, name, optional phone, password and optional admin code
///
/// # Returns
/// - `201 Created` - The new account
/// - `400 Bad Request` - Invalid field or admin code
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.admin_code_service);

    let user = service.register(RegisterParams::from(payload)).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with email and password.
///
/// On success the user id is stored in the session cookie.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - The logged-in user
/// - `401 Unauthorized` - Incorrect email or password
/// - `403 Forbidden` - Account deactivated
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 401, description = "Incorrect email or password", body = ErrorDto),
        (status = 403, description = "Account deactivated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.admin_code_service);

    let user = service.login(&payload.email, &payload.password).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::info!("User {} logged in", user.id);

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            user: user.into_dto(),
        }),
    ))
}

/// Log out and clear the session.
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}
