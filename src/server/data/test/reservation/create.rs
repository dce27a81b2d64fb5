use super::*;

/// Tests creating a confirmed reservation holding a table.
///
/// Expected: Ok(Reservation) with status and table stored
#[tokio::test]
async fn creates_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let date = Utc.with_ymd_and_hms(2026, 12, 24, 19, 0, 0).unwrap();

    let repo = ReservationRepository::new(db);
    let reservation = repo
        .create(CreateReservationParams {
            customer_id: customer.id,
            reservation_date: date,
            party_size: 4,
            status: ReservationStatus::Confirmed,
            table_number: Some("Table 3".to_string()),
            special_requests: None,
            occasion: Some("Birthday".to_string()),
        })
        .await?;

    assert_eq!(reservation.reservation_date, date);
    assert_eq!(reservation.status, ReservationStatus::Confirmed);
    assert_eq!(reservation.table_number.as_deref(), Some("Table 3"));
    assert_eq!(repo.find_by_id(reservation.id).await?, Some(reservation));

    Ok(())
}
