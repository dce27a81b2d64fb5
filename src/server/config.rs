use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:5173,https://localhost:5173,http://localhost:3000,https://localhost:3000";
const DEFAULT_TAX_RATE: f64 = 0.08;
const DEFAULT_SERVICE_CHARGE_RATE: f64 = 0.10;
const DEFAULT_CURRENCY: &str = "ghs";
const DEFAULT_STRIPE_API_URL: &str = "https://api.stripe.com";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub cors_origins: Vec<String>,

    pub tax_rate: f64,
    pub service_charge_rate: f64,
    pub currency: String,

    /// Card payments are disabled when unset.
    pub stripe_secret_key: Option<String>,
    pub stripe_api_url: String,

    /// Marks the session cookie `Secure`; enable behind HTTPS.
    pub session_secure: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: var_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            cors_origins: parse_origins(&var_or("CORS_ORIGINS", DEFAULT_CORS_ORIGINS)),
            tax_rate: parse_var("TAX_RATE", DEFAULT_TAX_RATE)?,
            service_charge_rate: parse_var("SERVICE_CHARGE_RATE", DEFAULT_SERVICE_CHARGE_RATE)?,
            currency: var_or("CURRENCY", DEFAULT_CURRENCY).to_lowercase(),
            stripe_secret_key: std::env::var("STRIPE_SECRET_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            stripe_api_url: var_or("STRIPE_API_URL", DEFAULT_STRIPE_API_URL),
            session_secure: parse_var("SESSION_SECURE", false)?,
        })
    }
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            var: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
