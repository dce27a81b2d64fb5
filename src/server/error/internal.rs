use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enum column holds a value outside its known set.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown value '{value}' stored in column {column}")]
    InvalidStoredValue {
        /// Column the value was read from
        column: &'static str,
        /// The unrecognised stored value
        value: String,
    },

    /// Password hashing failed.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// A monetary amount could not be represented.
    #[error("Invalid monetary amount {0}")]
    InvalidAmount(f64),

    /// A card payment row has no gateway intent id.
    #[error("Card payment {0} has no gateway reference")]
    MissingGatewayReference(i32),
}
