//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to derive unique emails, slugs, SKUs and order numbers across factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a category and an available menu item inside it.
///
/// # Returns
/// - `Ok((category, menu_item))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_menu_item_with_category(
    db: &DatabaseConnection,
) -> Result<(entity::category::Model, entity::menu_item::Model), DbErr> {
    let category = crate::factory::category::create_category(db).await?;
    let item = crate::factory::menu_item::create_menu_item(db, category.id).await?;

    Ok((category, item))
}

/// Creates a customer, a menu item, and an order for that customer holding one line of
/// the item.
///
/// Order totals are consistent with the single line: subtotal equals the line total and
/// tax/service charge are zero.
///
/// # Returns
/// - `Ok((customer, menu_item, order))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::menu_item::Model,
        entity::order::Model,
    ),
    DbErr,
> {
    let customer = crate::factory::user::create_user(db).await?;
    let (_, item) = create_menu_item_with_category(db).await?;
    let order = crate::factory::order::OrderFactory::new(db, customer.id)
        .totals(item.price, 0.0, 0.0)
        .build()
        .await?;
    crate::factory::order::create_order_item(db, order.id, &item, 1).await?;

    Ok((customer, item, order))
}
