use super::*;
use sea_orm::EntityTrait;

/// Tests deleting an order together with its items and payment.
///
/// Expected: Ok(true) and no orphaned rows
#[tokio::test]
async fn deletes_order_items_and_payment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, order) = factory::helpers::create_order_with_dependencies(db).await?;
    factory::create_payment(db, &order, "cash", "pending", None).await?;

    let repo = OrderRepository::new(db);

    assert!(repo.delete(order.id).await?);
    assert!(repo.find_by_id(order.id).await?.is_none());
    assert!(entity::prelude::OrderItem::find().all(db).await?.is_empty());
    assert!(entity::prelude::Payment::find().all(db).await?.is_empty());
    assert!(!repo.delete(order.id).await?);

    Ok(())
}
