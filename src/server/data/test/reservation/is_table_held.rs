use super::*;

/// Tests that a hold stored with seconds still blocks its minute.
///
/// Expected: held at 19:00 for other reservations, free at 19:01 or for the holder itself
#[tokio::test]
async fn matches_holds_within_the_minute() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let seven = Utc.with_ymd_and_hms(2026, 11, 20, 19, 0, 0).unwrap();

    let holder = factory::reservation::ReservationFactory::new(db, customer.id)
        .reservation_date(seven + Duration::seconds(42))
        .status("confirmed")
        .table_number("Table 1")
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, customer.id)
        .reservation_date(seven)
        .status("cancelled")
        .table_number("Table 2")
        .build()
        .await?;

    let repo = ReservationRepository::new(db);

    assert!(repo.is_table_held("Table 1", seven, None).await?);
    assert!(!repo.is_table_held("Table 1", seven, Some(holder.id)).await?);
    assert!(
        !repo
            .is_table_held("Table 1", seven + Duration::minutes(1), None)
            .await?
    );
    assert!(!repo.is_table_held("Table 2", seven, None).await?);

    Ok(())
}
