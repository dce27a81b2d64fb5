use super::*;
use chrono::{Duration, Utc};

/// Tests that orders are listed newest first with their items attached.
///
/// Expected: orders in descending creation order, each carrying its lines
#[tokio::test]
async fn lists_newest_first_with_items() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let (_, item) = factory::helpers::create_menu_item_with_category(db).await?;
    let older = factory::order::OrderFactory::new(db, customer.id)
        .created_at(Utc::now() - Duration::hours(2))
        .build()
        .await?;
    let newer = factory::order::OrderFactory::new(db, customer.id)
        .build()
        .await?;
    factory::create_order_item(db, older.id, &item, 3).await?;
    factory::create_order_item(db, newer.id, &item, 1).await?;

    let repo = OrderRepository::new(db);
    let (orders, total) = repo.get_paginated(OrderFilter::default(), 0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(orders[0].id, newer.id);
    assert_eq!(orders[1].id, older.id);
    assert_eq!(orders[0].items[0].quantity, 1);
    assert_eq!(orders[1].items[0].quantity, 3);

    Ok(())
}

/// Tests the customer and status filters.
///
/// Expected: only the matching customer's orders, then only the matching status
#[tokio::test]
async fn filters_by_customer_and_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    factory::order::OrderFactory::new(db, alice.id)
        .status("ready")
        .build()
        .await?;
    factory::create_order(db, alice.id).await?;
    factory::create_order(db, bob.id).await?;

    let repo = OrderRepository::new(db);

    let (alices, alice_total) = repo
        .get_paginated(
            OrderFilter {
                customer_id: Some(alice.id),
                status: None,
            },
            0,
            10,
        )
        .await?;
    assert_eq!(alice_total, 2);
    assert!(alices.iter().all(|order| order.customer_id == alice.id));

    let (ready, ready_total) = repo
        .get_paginated(
            OrderFilter {
                customer_id: None,
                status: Some(OrderStatus::Ready),
            },
            0,
            10,
        )
        .await?;
    assert_eq!(ready_total, 1);
    assert_eq!(ready[0].status, OrderStatus::Ready);

    Ok(())
}
