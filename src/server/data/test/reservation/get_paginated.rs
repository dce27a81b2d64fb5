use super::*;

/// Tests listing by reservation date, latest first, optionally for one customer.
///
/// Expected: latest reservation first; customer filter excludes others
#[tokio::test]
async fn lists_latest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let soon = factory::reservation::ReservationFactory::new(db, alice.id)
        .reservation_date(Utc::now() + Duration::days(1))
        .build()
        .await?;
    let later = factory::reservation::ReservationFactory::new(db, alice.id)
        .reservation_date(Utc::now() + Duration::days(5))
        .build()
        .await?;
    factory::create_reservation(db, bob.id).await?;

    let repo = ReservationRepository::new(db);

    let (all, total) = repo.get_paginated(None, 0, 10).await?;
    assert_eq!(total, 3);
    assert_eq!(all[0].id, later.id);

    let (alices, alice_total) = repo.get_paginated(Some(alice.id), 0, 10).await?;
    assert_eq!(alice_total, 2);
    assert_eq!(
        alices.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![later.id, soon.id]
    );

    Ok(())
}
