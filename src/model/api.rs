use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Largest page size a list endpoint will return.
pub const MAX_ENTRIES: u64 = 100;

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorDto {
    pub error: String,
}

/// Zero-indexed pagination query shared by every list endpoint.
#[derive(Deserialize, IntoParams, Debug, Clone)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number (default: 0)
    #[serde(default)]
    pub page: u64,
    /// Items per page (default: 10, max: 100)
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 0,
            entries: default_entries(),
        }
    }
}

impl PaginationParams {
    /// Page size clamped to `1..=MAX_ENTRIES`.
    pub fn per_page(&self) -> u64 {
        self.entries.clamp(1, MAX_ENTRIES)
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ApiInfoDto {
    pub message: String,
    pub version: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct HealthDto {
    pub status: String,
}
