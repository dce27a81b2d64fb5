use super::*;

fn params(email: &str) -> CreateUserParams {
    CreateUserParams {
        email: email.to_string(),
        name: "Ama Mensah".to_string(),
        phone: Some("+233 20 123 4567".to_string()),
        password_hash: "hash".to_string(),
        role: UserRole::Customer,
    }
}

/// Tests creating a new user.
///
/// Verifies that the repository stores every field and marks the account active.
///
/// Expected: Ok(User) with matching fields and `is_active == true`
#[tokio::test]
async fn creates_active_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("ama@example.com")).await?;

    assert_eq!(user.email, "ama@example.com");
    assert_eq!(user.name, "Ama Mensah");
    assert_eq!(user.phone.as_deref(), Some("+233 20 123 4567"));
    assert_eq!(user.role, UserRole::Customer);
    assert!(user.is_active);
    assert!(user.updated_at.is_none());

    Ok(())
}

/// Tests that the email unique index rejects duplicates.
///
/// Expected: Err on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("dup@example.com")).await?;
    let result = repo.create(params("dup@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
