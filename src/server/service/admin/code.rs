//! One-time admin bootstrap codes.
//!
//! When the server starts without any admin account it generates a 6-digit code, logs it,
//! and keeps it in memory. The first registration that presents the code before it
//! expires is created as an admin and the code is consumed.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Default lifetime of a generated code.
pub const ADMIN_CODE_TTL: Duration = Duration::from_secs(300);

const CODE_DIGITS: usize = 6;

#[derive(Clone)]
struct AdminCode {
    code: String,
    expires_at: Instant,
}

impl AdminCode {
    fn new(code: String, ttl: Duration) -> Self {
        Self {
            code,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn matches(&self, input: &str) -> bool {
        self.code == input.trim()
    }
}

/// Holds at most one pending admin code, shared across request handlers.
#[derive(Clone)]
pub struct AdminCodeService {
    code: Arc<RwLock<Option<AdminCode>>>,
    ttl: Duration,
}

impl AdminCodeService {
    /// Creates a service with no active code and the default TTL.
    pub fn new() -> Self {
        Self::with_ttl(ADMIN_CODE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// Generates a new random 6-digit code, replacing any previous one.
    ///
    /// # Returns
    /// - `String` - The generated code, zero-padded to six digits
    pub async fn generate(&self) -> String {
        let code = Self::generate_random_code();
        *self.code.write().await = Some(AdminCode::new(code.clone(), self.ttl));
        code
    }

    /// Validates the provided code and consumes it on success.
    ///
    /// Expired codes are cleared and fail validation. A wrong code leaves the stored code
    /// in place.
    ///
    /// # Returns
    /// - `true` - Code matched and was still valid; it can no longer be used
    /// - `false` - Code doesn't match, has expired, or none exists
    pub async fn validate_and_consume(&self, input_code: &str) -> bool {
        let mut code = self.code.write().await;

        if let Some(stored_code) = code.as_ref() {
            if stored_code.is_expired() {
                *code = None;
                return false;
            }

            if stored_code.matches(input_code) {
                *code = None;
                return true;
            }
        }

        false
    }

    fn generate_random_code() -> String {
        let mut rng = rand::rng();

        (0..CODE_DIGITS)
            .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
            .collect()
    }

    /// Whether a non-expired code is currently stored.
    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        let mut code = self.code.write().await;

        if let Some(stored_code) = code.as_ref() {
            if stored_code.is_expired() {
                *code = None;
                return false;
            }
            return true;
        }

        false
    }
}

impl Default for AdminCodeService {
    fn default() -> Self {
        Self::new()
    }
}
