use super::*;

/// Tests that a payment status change is mirrored onto the order.
///
/// Expected: payment and order both report `paid`
#[tokio::test]
async fn mirrors_status_onto_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, order) = factory::helpers::create_order_with_dependencies(db).await?;
    let payment = factory::create_payment(db, &order, "card", "pending", Some("pi_1")).await?;

    let repo = PaymentRepository::new(db);
    let updated = repo
        .set_status(payment.id, PaymentStatus::Paid)
        .await?
        .unwrap();

    assert_eq!(updated.status, PaymentStatus::Paid);
    assert!(updated.updated_at.is_some());

    let order = OrderRepository::new(db).find_by_id(order.id).await?.unwrap();
    assert_eq!(order.payment_status, PaymentStatus::Paid);

    Ok(())
}

/// Tests updating a missing payment.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_payment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PaymentRepository::new(db);

    assert!(repo.set_status(77, PaymentStatus::Paid).await?.is_none());

    Ok(())
}
