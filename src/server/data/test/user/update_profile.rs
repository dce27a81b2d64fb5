use super::*;

/// Tests a partial profile update.
///
/// Verifies that only provided fields change and the update time is recorded.
///
/// Expected: name changed, email unchanged, `updated_at` set
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::UserFactory::new(db)
        .email("esi@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            stored.id,
            UpdateProfileParams {
                name: Some("Esi Owusu".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Esi Owusu");
    assert_eq!(updated.email, "esi@example.com");
    assert!(updated.updated_at.is_some());

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update_profile(999, UpdateProfileParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
