use super::*;

/// Tests batch lookup of menu items.
///
/// Verifies that unknown ids are skipped rather than failing the lookup.
///
/// Expected: only the existing items are returned
#[tokio::test]
async fn skips_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let first = factory::create_menu_item(db, category.id).await?;
    let second = factory::create_menu_item(db, category.id).await?;

    let repo = MenuItemRepository::new(db);
    let mut found = repo.find_by_ids(vec![first.id, second.id, 9999]).await?;
    found.sort_by_key(|item| item.id);

    assert_eq!(
        found.iter().map(|item| item.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );
    assert!(repo.find_by_ids(Vec::new()).await?.is_empty());

    Ok(())
}
