use super::*;

/// Tests that listing skips inactive categories and orders by name.
///
/// Expected: only the active categories, alphabetically, with a matching total
#[tokio::test]
async fn lists_only_active_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::CategoryFactory::new(db)
        .name("Soups")
        .build()
        .await?;
    factory::category::CategoryFactory::new(db)
        .name("Appetizers")
        .build()
        .await?;
    factory::category::CategoryFactory::new(db)
        .name("Retired")
        .active(false)
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let (categories, total) = repo.get_active_paginated(0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(
        categories.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
        vec!["Appetizers", "Soups"]
    );

    Ok(())
}
