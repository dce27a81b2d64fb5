use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session. Results in 401.
    #[error("Failed to find user ID in session")]
    UserNotInSession,

    /// The session references a user that no longer exists. Results in 401.
    #[error("Failed to find user with ID {0} in database")]
    UserNotInDatabase(i32),

    /// Unknown email or wrong password. Results in 401 without revealing which.
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// The account was deactivated by an administrator. Results in 403.
    #[error("User {0} is inactive")]
    AccountInactive(i32),

    /// The user lacks the role or ownership required. Results in 403.
    ///
    /// # Fields
    /// - User id
    /// - Detail for server-side logging
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 "Not authenticated"
/// - `InvalidCredentials` → 401 "Incorrect email or password"
/// - `AccountInactive` → 403 "Account is inactive"
/// - `AccessDenied` → 403 "Access denied"
///
/// Details are logged at debug level; client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not authenticated")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Incorrect email or password"),
            Self::AccountInactive(_) => (StatusCode::FORBIDDEN, "Account is inactive"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
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
