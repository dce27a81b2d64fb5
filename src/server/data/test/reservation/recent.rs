use super::*;

/// Tests that recent reservations are ordered by booking time and limited.
///
/// Expected: the two most recently booked reservations, newest first
#[tokio::test]
async fn returns_newest_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let mut ids = Vec::new();
    for hours_ago in [3, 2, 1] {
        let reservation = factory::reservation::ReservationFactory::new(db, customer.id)
            .created_at(Utc::now() - Duration::hours(hours_ago))
            .build()
            .await?;
        ids.push(reservation.id);
    }

    let repo = ReservationRepository::new(db);
    let recent = repo.recent(2).await?;

    assert_eq!(
        recent.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![ids[2], ids[1]]
    );

    Ok(())
}
