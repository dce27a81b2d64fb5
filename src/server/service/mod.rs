//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Handling complex multi-step operations

pub mod admin;
pub mod auth;
pub mod availability;
pub mod category;
pub mod gateway;
pub mod inventory;
pub mod menu_item;
pub mod order;
pub mod payment;
pub mod report;
pub mod reservation;
pub mod setting;
pub mod user;
pub mod validate;

#[cfg(test)]
mod test;
