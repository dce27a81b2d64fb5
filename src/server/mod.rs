//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the restaurant API,
//! including HTTP endpoints, business logic, data access, and infrastructure services.
//! The backend uses Axum as the web framework, SeaORM over SQLite for persistence, and
//! tower-sessions for cookie-based login.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Request/response processing and authentication guards
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, payment gateway, pricing rates)
//! - **Startup** (`startup`) - Initialization of database, sessions, CORS, and the gateway
//! - **Router** (`router`) - Axum route configuration and OpenAPI documentation
//! - **Utilities** (`util/`) - Password hashing, money arithmetic, and parsing helpers
//!
//! # Request Flow
//!
//! Placing an order, for example:
//!
//! 1. The session layer loads the cookie's session before the handler runs
//! 2. `controller::order::create_order` resolves the logged-in user through `AuthGuard`
//! 3. The request DTO becomes `CreateOrderParams` and goes to `OrderService::create`
//! 4. The service prices each line from the menu and writes the order in one transaction
//! 5. Repositories convert the stored rows back into an `Order`
//! 6. The controller returns `order.into_dto()` as JSON with `201 Created`

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
