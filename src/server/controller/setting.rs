use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        setting::{SettingDto, UpsertSettingDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::setting::{Setting, UpsertSettingParams},
        service::setting::SettingService,
        state::AppState,
    },
};

/// Tag for grouping restaurant setting endpoints in OpenAPI documentation
pub static SETTING_TAG: &str = "setting";

/// List all restaurant settings by key.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/v1/admin/settings",
    tag = SETTING_TAG,
    responses(
        (status = 200, description = "All settings", body = Vec<SettingDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_settings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let settings: Vec<SettingDto> = SettingService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(Setting::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(settings)))
}

/// Create or replace a setting.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/v1/admin/settings/{key}",
    tag = SETTING_TAG,
    params(
        ("key" = String, Path, description = "Setting key")
    ),
    request_body = UpsertSettingDto,
    responses(
        (status = 200, description = "Setting stored", body = SettingDto),
        (status = 400, description = "Empty key", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_setting(
    State(state): State<AppState>,
    session: Session,
    Path(key): Path<String>,
    Json(payload): Json<UpsertSettingDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let setting = SettingService::new(&state.db)
        .upsert(UpsertSettingParams::from_dto(key, payload))
        .await?;

    Ok((StatusCode::OK, Json(setting.into_dto())))
}

/// Delete a setting.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/v1/admin/settings/{key}",
    tag = SETTING_TAG,
    params(
        ("key" = String, Path, description = "Setting key")
    ),
    responses(
        (status = 204, description = "Setting deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Setting not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_setting(
    State(state): State<AppState>,
    session: Session,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    SettingService::new(&state.db).delete(&key).await?;

    Ok(StatusCode::NO_CONTENT)
}
