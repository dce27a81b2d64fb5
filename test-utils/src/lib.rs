//! TastyBite Test Utils
//!
//! Shared testing utilities for the TastyBite server. Provides a builder for test contexts
//! backed by in-memory SQLite databases, plus factories that insert realistic rows for
//! every restaurant entity.
//!
//! # Overview
//!
//! - **TestBuilder**: fluent builder choosing which tables exist in the test database
//! - **TestContext**: database connection and session for a single test
//! - **TestError**: errors that can occur during test setup
//! - **factory**: builders inserting users, menu items, orders, reservations and more
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::User;
//!
//! #[tokio::test]
//! async fn test_user_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(User)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
