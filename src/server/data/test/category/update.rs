use super::*;

/// Tests deactivating a category through a partial update.
///
/// Expected: `is_active == false`, name unchanged
#[tokio::test]
async fn applies_partial_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::category::CategoryFactory::new(db)
        .name("Drinks")
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let updated = repo
        .update(
            stored.id,
            UpdateCategoryParams {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Drinks");
    assert!(!updated.is_active);

    Ok(())
}

/// Tests updating a missing category.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);

    assert!(repo
        .update(7, UpdateCategoryParams::default())
        .await?
        .is_none());

    Ok(())
}
