use super::*;

/// Tests creating a card payment for an order.
///
/// Expected: pending payment findable by its order id, order marked pending
#[tokio::test]
async fn creates_pending_payment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, order) = factory::helpers::create_order_with_dependencies(db).await?;

    let repo = PaymentRepository::new(db);
    let payment = repo
        .create(
            NewPayment {
                order_id: order.id,
                gateway_reference: Some("pi_123".to_string()),
                amount: order.total_amount,
                currency: "ghs".to_string(),
                payment_method: PaymentMethod::Card,
            },
            None,
        )
        .await?;

    assert_eq!(payment.status, PaymentStatus::Pending);
    assert_eq!(payment.payment_method, PaymentMethod::Card);
    assert_eq!(repo.find_by_order_id(order.id).await?, Some(payment));

    let order = OrderRepository::new(db).find_by_id(order.id).await?.unwrap();
    assert_eq!(order.payment_status, PaymentStatus::Pending);

    Ok(())
}

/// Tests that a second payment for the same order is rejected unless it replaces the first.
///
/// Expected: Err on duplicate with the first row kept, Ok when replacing it
#[tokio::test]
async fn allows_one_payment_per_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, order) = factory::helpers::create_order_with_dependencies(db).await?;
    let existing = factory::create_payment(db, &order, "card", "failed", Some("pi_old")).await?;

    let repo = PaymentRepository::new(db);
    let new_payment = NewPayment {
        order_id: order.id,
        gateway_reference: None,
        amount: order.total_amount,
        currency: "ghs".to_string(),
        payment_method: PaymentMethod::Cash,
    };

    assert!(repo.create(new_payment.clone(), None).await.is_err());
    let kept = repo.find_by_order_id(order.id).await?.unwrap();
    assert_eq!(kept.id, existing.id);
    assert_eq!(kept.status, PaymentStatus::Failed);

    let payment = repo.create(new_payment, Some(existing.id)).await?;
    assert_eq!(payment.payment_method, PaymentMethod::Cash);
    assert_eq!(repo.find_by_order_id(order.id).await?, Some(payment));

    Ok(())
}
