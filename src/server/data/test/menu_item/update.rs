use super::*;

/// Tests changing price and availability.
///
/// Expected: Ok(Some(MenuItem)) with new values and `updated_at` set
#[tokio::test]
async fn updates_price_and_availability() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, stored) = factory::helpers::create_menu_item_with_category(db).await?;

    let repo = MenuItemRepository::new(db);
    let updated = repo
        .update(
            stored.id,
            UpdateMenuItemParams {
                price: Some(15.5),
                is_available: Some(false),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.price, 15.5);
    assert!(!updated.is_available);
    assert_eq!(updated.name, stored.name);
    assert!(updated.updated_at.is_some());

    Ok(())
}
