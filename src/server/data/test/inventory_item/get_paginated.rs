use super::*;

/// Tests the low-stock filter.
///
/// Verifies that items at or below their par level are returned and items above it are
/// excluded.
///
/// Expected: only the two items with quantity <= par
#[tokio::test]
async fn filters_low_stock() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InventoryItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::inventory_item::InventoryItemFactory::new(db)
        .name("Onions")
        .stock(3, 10)
        .build()
        .await?;
    factory::inventory_item::InventoryItemFactory::new(db)
        .name("Garlic")
        .stock(10, 10)
        .build()
        .await?;
    factory::inventory_item::InventoryItemFactory::new(db)
        .name("Tomatoes")
        .stock(40, 10)
        .build()
        .await?;

    let repo = InventoryItemRepository::new(db);

    let (all, total) = repo.get_paginated(false, 0, 10).await?;
    assert_eq!(total, 3);
    assert_eq!(all[0].name, "Garlic");

    let (low, low_total) = repo.get_paginated(true, 0, 10).await?;
    assert_eq!(low_total, 2);
    assert_eq!(
        low.iter().map(|item| item.name.as_str()).collect::<Vec<_>>(),
        vec!["Garlic", "Onions"]
    );
    assert!(low.iter().all(|item| item.needs_reorder()));

    Ok(())
}
