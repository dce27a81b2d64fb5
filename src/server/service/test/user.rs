use crate::{
    model::user::UserRole,
    server::{error::AppError, model::user::UpdateProfileParams, service::user::UserService},
};
use entity::prelude::User;
use test_utils::{builder::TestBuilder, factory};

/// Tests changing a profile's email to one already in use.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_taken_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .email("esi@example.com")
        .build()
        .await?;
    let user = factory::create_user(db).await?;

    let result = UserService::new(db)
        .update_profile(
            user.id,
            UpdateProfileParams {
                email: Some("ESI@example.com".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests an admin deactivating another account and then themselves.
///
/// Expected: Ok(inactive) for the other account, BadRequest for self
#[tokio::test]
async fn toggles_other_accounts_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_user_with_role(db, "admin").await?;
    let customer = factory::create_user(db).await?;
    let service = UserService::new(db);

    let toggled = service.toggle_active(admin.id, customer.id).await?;
    assert!(!toggled.is_active);

    let restored = service.toggle_active(admin.id, customer.id).await?;
    assert!(restored.is_active);

    let own = service.toggle_active(admin.id, admin.id).await;
    assert!(matches!(own, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests role changes, including an admin demoting themselves.
///
/// Expected: Ok for another account, BadRequest for self-demotion
#[tokio::test]
async fn guards_own_admin_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_user_with_role(db, "admin").await?;
    let customer = factory::create_user(db).await?;
    let service = UserService::new(db);

    let promoted = service
        .set_role(admin.id, customer.id, UserRole::Manager)
        .await?;
    assert_eq!(promoted.role, UserRole::Manager);

    let demoted = service.set_role(admin.id, admin.id, UserRole::Staff).await;
    assert!(matches!(demoted, Err(AppError::BadRequest(_))));

    let missing = service.set_role(admin.id, 999, UserRole::Staff).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}
