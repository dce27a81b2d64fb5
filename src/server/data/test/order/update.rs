use super::*;

/// Tests a staff status update.
///
/// Expected: status changed, items still attached, `updated_at` set
#[tokio::test]
async fn updates_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, order) = factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    let updated = repo
        .update(
            order.id,
            UpdateOrderParams {
                status: Some(OrderStatus::Preparing),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, OrderStatus::Preparing);
    assert_eq!(updated.items.len(), 1);
    assert!(updated.updated_at.is_some());

    Ok(())
}

/// Tests updating a missing order.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);

    assert!(repo
        .update(55, UpdateOrderParams::default())
        .await?
        .is_none());

    Ok(())
}
