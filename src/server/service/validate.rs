//! Input checks shared by the services.
//!
//! Each helper returns `AppError::BadRequest` with a client-facing message when the value
//! is unacceptable.

use crate::server::{
    error::AppError,
    util::validate::{is_valid_email, is_valid_phone},
};

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Trims and lower-cases an email, rejecting malformed addresses.
pub fn email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();
    if !is_valid_email(&email) {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }
    Ok(email)
}

/// Trims a required text field, rejecting blank values.
pub fn required(value: &str, field: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{field} is required")));
    }
    Ok(value.to_string())
}

pub fn phone(phone: &str) -> Result<String, AppError> {
    let phone = phone.trim();
    if !is_valid_phone(phone) {
        return Err(AppError::BadRequest(
            "Phone number must contain 10 to 15 digits".to_string(),
        ));
    }
    Ok(phone.to_string())
}

pub fn password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Rejects negative counts such as calories or stock levels.
pub fn non_negative(value: i32, field: &str) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::BadRequest(format!("{field} cannot be negative")));
    }
    Ok(())
}

/// Rejects NaN, infinities and negative amounts.
pub fn non_negative_amount(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::BadRequest(format!(
            "{field} must be a non-negative amount"
        )));
    }
    Ok(())
}

/// Rejects NaN, infinities, zero and negative amounts.
pub fn positive_amount(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::BadRequest(format!(
            "{field} must be greater than zero"
        )));
    }
    Ok(())
}
