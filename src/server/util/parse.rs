use std::str::FromStr;

use crate::server::error::{internal::InternalError, AppError};

/// Parses an enum value stored as text in the database.
///
/// # Arguments
/// - `column` - Column name, reported if parsing fails
/// - `value` - The stored string
///
/// # Returns
/// - `Ok(T)` - Successfully parsed value
/// - `Err(AppError::InternalErr(InvalidStoredValue))` - The stored string is not a known
///   variant
pub fn parse_stored<T: FromStr>(column: &'static str, value: String) -> Result<T, AppError> {
    let result = value
        .parse::<T>()
        .map_err(|_| InternalError::InvalidStoredValue { column, value })?;

    Ok(result)
}
