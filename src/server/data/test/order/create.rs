use super::*;

/// Tests creating an order with its items.
///
/// Verifies that the order starts pending/pending and that its items are stored and
/// returned with it.
///
/// Expected: Ok(Order) with one item and matching totals
#[tokio::test]
async fn creates_order_with_items() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let (_, item) = factory::helpers::create_menu_item_with_category(db).await?;

    let repo = OrderRepository::new(db);
    let order = repo.create(new_order(customer.id, &item)).await?;

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.payment_status, PaymentStatus::Pending);
    assert_eq!(order.total_amount, 30.66);
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].quantity, 2);
    assert_eq!(order.items[0].menu_item_id, Some(item.id));

    let reloaded = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(reloaded, order);

    Ok(())
}

/// Tests that a failing line insert leaves no order behind.
///
/// Uses a duplicate order number so the order insert itself fails inside the
/// transaction.
///
/// Expected: Err, and only the first order remains
#[tokio::test]
async fn rolls_back_on_failure() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let (_, item) = factory::helpers::create_menu_item_with_category(db).await?;

    let repo = OrderRepository::new(db);
    let first = new_order(customer.id, &item);
    let mut duplicate = new_order(customer.id, &item);
    duplicate.order_number = first.order_number.clone();

    repo.create(first).await?;
    let result = repo.create(duplicate).await;

    assert!(result.is_err());
    let (_, total) = repo.get_paginated(OrderFilter::default(), 0, 10).await?;
    assert_eq!(total, 1);

    Ok(())
}
