//! HTTP handlers.
//!
//! Each handler checks access with `AuthGuard`, converts request DTOs into domain
//! parameters, calls a service and converts the result back into a response DTO.

pub mod admin;
pub mod auth;
pub mod availability;
pub mod category;
pub mod health;
pub mod inventory;
pub mod menu_item;
pub mod order;
pub mod payment;
pub mod reservation;
pub mod setting;
pub mod user;
