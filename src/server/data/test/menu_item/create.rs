use super::*;

/// Tests creating a menu item in a category.
///
/// Expected: Ok(MenuItem) with the given fields and a count of one in the category
#[tokio::test]
async fn creates_menu_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let repo = MenuItemRepository::new(db);
    let item = repo
        .create(CreateMenuItemParams {
            category_id: category.id,
            name: "Jollof Rice".to_string(),
            description: None,
            price: 12.99,
            image_url: None,
            is_available: true,
            is_featured: true,
            calories: Some(650),
            preparation_time: Some(20),
        })
        .await?;

    assert_eq!(item.name, "Jollof Rice");
    assert_eq!(item.price, 12.99);
    assert!(item.is_featured);
    assert_eq!(repo.count_by_category(category.id).await?, 1);

    Ok(())
}
