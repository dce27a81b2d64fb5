use super::*;

/// Tests finding a user by email.
///
/// Expected: Ok(Some(User)) for the stored email, Ok(None) for an unknown one
#[tokio::test]
async fn finds_user_by_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::UserFactory::new(db)
        .email("kofi@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("kofi@example.com").await?;
    let missing = repo.find_by_email("nobody@example.com").await?;

    assert_eq!(found.map(|user| user.id), Some(stored.id));
    assert!(missing.is_none());

    Ok(())
}

/// Tests that an unknown stored role surfaces as an error rather than a default.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_unknown_stored_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::UserFactory::new(db)
        .role("chef")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_id(stored.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
