//! SeaORM entity models for the TastyBite database schema.
//!
//! One module per table. Enumerated columns (roles, statuses, order types) are stored
//! as lower-case strings and parsed into typed enums at the repository boundary.

pub mod prelude;

pub mod category;
pub mod inventory_item;
pub mod menu_item;
pub mod order;
pub mod order_item;
pub mod payment;
pub mod reservation;
pub mod setting;
pub mod user;
