use super::*;

/// Tests cancelling a reservation and then deleting it.
///
/// Expected: status becomes cancelled; delete returns true then false
#[tokio::test]
async fn cancels_and_deletes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let stored = factory::create_reservation(db, customer.id).await?;

    let repo = ReservationRepository::new(db);
    let updated = repo
        .update(
            stored.id,
            UpdateReservationParams {
                status: Some(ReservationStatus::Cancelled),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, ReservationStatus::Cancelled);
    assert_eq!(updated.party_size, stored.party_size);

    assert!(repo.delete(stored.id).await?);
    assert!(!repo.delete(stored.id).await?);

    Ok(())
}
