use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` or one of the grouped helpers, then call
/// `build()` to create an in-memory SQLite database containing those tables.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Category, MenuItem};
///
/// let test = TestBuilder::new()
///     .with_table(Category)
///     .with_table(MenuItem)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables must be added in dependency order: referenced tables before the tables
    /// holding foreign keys to them.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables backing the menu catalog: Category and MenuItem.
    pub fn with_menu_tables(self) -> Self {
        self.with_table(Category).with_table(MenuItem)
    }

    /// Adds all tables required for order operations.
    ///
    /// Adds, in dependency order:
    /// - User
    /// - Category
    /// - MenuItem
    /// - Order
    /// - OrderItem
    /// - Payment
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_order_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_order_tables(self) -> Self {
        self.with_table(User)
            .with_menu_tables()
            .with_table(Order)
            .with_table(OrderItem)
            .with_table(Payment)
    }

    /// Adds the User and Reservation tables.
    pub fn with_reservation_tables(self) -> Self {
        self.with_table(User).with_table(Reservation)
    }

    /// Adds every table in the schema.
    ///
    /// Used by router-level tests where a request may touch any part of the data model.
    pub fn with_all_tables(self) -> Self {
        self.with_order_tables()
            .with_table(Reservation)
            .with_table(InventoryItem)
            .with_table(Setting)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
