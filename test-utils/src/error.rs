use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory database or creating tables failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
    /// The session store could not be initialized.
    #[error("Failed to initialize session store: {0}")]
    Session(String),
}
