//! Factory methods for creating test data.
//!
//! Each entity has a `*Factory` builder for customization and a `create_*` convenience
//! function for quick default creation. Factories insert directly through SeaORM active
//! models, so they bypass service-level validation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let (category, item) = factory::helpers::create_menu_item_with_category(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let manager = factory::user::UserFactory::new(&db)
//!     .email("manager@example.com")
//!     .role("manager")
//!     .build()
//!     .await?;
//! ```

pub mod category;
pub mod helpers;
pub mod inventory_item;
pub mod menu_item;
pub mod order;
pub mod payment;
pub mod reservation;
pub mod user;

pub use category::create_category;
pub use inventory_item::create_inventory_item;
pub use menu_item::create_menu_item;
pub use order::{create_order, create_order_item};
pub use payment::create_payment;
pub use reservation::create_reservation;
pub use user::{create_user, create_user_with_role};
