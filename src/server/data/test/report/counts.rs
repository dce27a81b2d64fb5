use super::*;

/// Tests order counts overall, since a point in time and by status.
///
/// Expected: counts reflect creation time and open statuses
#[tokio::test]
async fn counts_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    factory::order::OrderFactory::new(db, customer.id)
        .created_at(Utc::now() - Duration::days(3))
        .status("delivered")
        .build()
        .await?;
    factory::order::OrderFactory::new(db, customer.id)
        .status("preparing")
        .build()
        .await?;
    factory::create_order(db, customer.id).await?;

    let repo = ReportRepository::new(db);

    assert_eq!(repo.count_orders(None).await?, 3);
    assert_eq!(
        repo.count_orders(Some(Utc::now() - Duration::days(1))).await?,
        2
    );
    assert_eq!(repo.count_orders_with_status(&OrderStatus::open()).await?, 2);

    Ok(())
}

/// Tests that only paid orders contribute revenue rows.
///
/// Expected: one row carrying the paid order's total
#[tokio::test]
async fn returns_paid_orders_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let paid = factory::order::OrderFactory::new(db, customer.id)
        .payment_status("paid")
        .totals(20.0, 1.6, 2.0)
        .build()
        .await?;
    factory::create_order(db, customer.id).await?;

    let repo = ReportRepository::new(db);
    let rows = repo.paid_orders(None).await?;

    assert_eq!(rows, vec![(paid.created_at, paid.total_amount)]);

    Ok(())
}

/// Tests reservation and user counts.
///
/// Expected: window, status and registration-time counts match the seeded rows
#[tokio::test]
async fn counts_reservations_and_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let veteran = factory::user::UserFactory::new(db)
        .created_at(Utc::now() - Duration::days(30))
        .build()
        .await?;
    factory::create_user(db).await?;

    let now = Utc::now();
    factory::reservation::ReservationFactory::new(db, veteran.id)
        .reservation_date(now + Duration::hours(1))
        .status("confirmed")
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, veteran.id)
        .reservation_date(now + Duration::days(10))
        .build()
        .await?;

    let repo = ReportRepository::new(db);

    assert_eq!(repo.count_reservations().await?, 2);
    assert_eq!(
        repo.count_reservations_between(now, now + Duration::days(1))
            .await?,
        1
    );
    assert_eq!(
        repo.count_reservations_with_status(ReservationStatus::Pending)
            .await?,
        1
    );
    assert_eq!(repo.count_users(None).await?, 2);
    assert_eq!(
        repo.count_users(Some(now - Duration::days(7))).await?,
        1
    );

    Ok(())
}
