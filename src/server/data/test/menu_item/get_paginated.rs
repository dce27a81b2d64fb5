use super::*;

/// Tests the category, availability and featured filters.
///
/// Expected: each filter narrows the result to the matching items
#[tokio::test]
async fn applies_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mains = factory::create_category(db).await?;
    let drinks = factory::create_category(db).await?;
    factory::menu_item::MenuItemFactory::new(db, mains.id)
        .name("Banku")
        .featured(true)
        .build()
        .await?;
    factory::menu_item::MenuItemFactory::new(db, mains.id)
        .name("Fufu")
        .available(false)
        .build()
        .await?;
    factory::menu_item::MenuItemFactory::new(db, drinks.id)
        .name("Sobolo")
        .build()
        .await?;

    let repo = MenuItemRepository::new(db);

    let (all, total) = repo.get_paginated(MenuItemFilter::default(), 0, 10).await?;
    assert_eq!(total, 3);
    assert_eq!(
        all.iter().map(|item| item.name.as_str()).collect::<Vec<_>>(),
        vec!["Banku", "Fufu", "Sobolo"]
    );

    let (available_mains, _) = repo
        .get_paginated(
            MenuItemFilter {
                category_id: Some(mains.id),
                available_only: true,
                featured_only: false,
            },
            0,
            10,
        )
        .await?;
    assert_eq!(available_mains.len(), 1);
    assert_eq!(available_mains[0].name, "Banku");

    let (featured, featured_total) = repo
        .get_paginated(
            MenuItemFilter {
                featured_only: true,
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(featured_total, 1);
    assert_eq!(featured[0].name, "Banku");

    Ok(())
}
