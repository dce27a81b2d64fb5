//! Wire-level data transfer objects.
//!
//! Every request and response body exchanged over the HTTP API is defined here with serde
//! and utoipa derives. Server code converts domain models into these types at the
//! controller boundary.

pub mod admin;
pub mod api;
pub mod inventory;
pub mod menu;
pub mod order;
pub mod payment;
pub mod reservation;
pub mod setting;
pub mod user;
