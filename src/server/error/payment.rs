use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum PaymentError {
    /// Card payments requested but no gateway secret key is configured. Results in 503.
    #[error("Card payments are not configured")]
    GatewayNotConfigured,

    /// The gateway could not be reached. Results in 502.
    #[error("Payment gateway request failed: {0}")]
    GatewayRequest(#[from] reqwest::Error),

    /// The gateway answered with an error status. Results in 502.
    #[error("Payment gateway returned {status}: {message}")]
    GatewayResponse { status: u16, message: String },
}

/// Converts payment errors into HTTP responses.
///
/// Gateway failures are logged with full detail and reported as 502 with a generic
/// message.
impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::GatewayNotConfigured => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Card payments are currently unavailable",
            ),
            Self::GatewayRequest(_) | Self::GatewayResponse { .. } => {
                tracing::error!("{}", self);
                (StatusCode::BAD_GATEWAY, "Payment provider error")
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
