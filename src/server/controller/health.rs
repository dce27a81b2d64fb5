use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::{ApiInfoDto, HealthDto};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// API name and version.
#[utoipa::path(
    get,
    path = "/",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "API information", body = ApiInfoDto)
    ),
)]
pub async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiInfoDto {
            message: "TastyBite Restaurant API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Liveness check.
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is running", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "healthy".to_string(),
        }),
    )
}
