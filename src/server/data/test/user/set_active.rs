use super::*;

/// Tests deactivating and reactivating an account.
///
/// Expected: `is_active` follows the value written
#[tokio::test]
async fn toggles_active_flag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let deactivated = repo.set_active(stored.id, false).await?.unwrap();
    assert!(!deactivated.is_active);

    let reactivated = repo.set_active(stored.id, true).await?.unwrap();
    assert!(reactivated.is_active);

    Ok(())
}
