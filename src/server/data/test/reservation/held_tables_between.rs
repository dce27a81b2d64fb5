use super::*;

/// Tests which reservations count as holding a table.
///
/// Verifies that only pending/confirmed reservations with a table inside the window are
/// returned; cancelled ones and those outside the window are ignored.
///
/// Expected: exactly the two holding reservations
#[tokio::test]
async fn returns_only_holding_reservations_in_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let seven = Utc.with_ymd_and_hms(2026, 11, 20, 19, 0, 0).unwrap();
    let half_past = Utc.with_ymd_and_hms(2026, 11, 20, 19, 30, 0).unwrap();
    let next_day = Utc.with_ymd_and_hms(2026, 11, 21, 19, 0, 0).unwrap();

    factory::reservation::ReservationFactory::new(db, customer.id)
        .reservation_date(seven)
        .status("confirmed")
        .table_number("Table 1")
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, customer.id)
        .reservation_date(half_past)
        .status("pending")
        .table_number("Table 2")
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, customer.id)
        .reservation_date(seven)
        .status("cancelled")
        .table_number("Table 3")
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, customer.id)
        .reservation_date(seven)
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, customer.id)
        .reservation_date(next_day)
        .status("confirmed")
        .table_number("Table 4")
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let start = Utc.with_ymd_and_hms(2026, 11, 20, 0, 0, 0).unwrap();
    let mut held = repo.held_tables_between(start, next_day).await?;
    held.sort();

    assert_eq!(
        held,
        vec![
            (seven, "Table 1".to_string()),
            (half_past, "Table 2".to_string()),
        ]
    );

    Ok(())
}
