use super::*;

/// Tests adding and removing stock.
///
/// Expected: quantity moves by the given change
#[tokio::test]
async fn adjusts_quantity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InventoryItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::inventory_item::InventoryItemFactory::new(db)
        .stock(20, 5)
        .build()
        .await?;

    let repo = InventoryItemRepository::new(db);

    let restocked = repo.adjust_quantity(stored.id, 15).await?.unwrap();
    assert_eq!(restocked.quantity_on_hand, 35);

    let used = repo.adjust_quantity(stored.id, -30).await?.unwrap();
    assert_eq!(used.quantity_on_hand, 5);
    assert!(used.needs_reorder());

    Ok(())
}

/// Tests that removing more than is on hand clamps at zero.
///
/// Expected: quantity_on_hand == 0
#[tokio::test]
async fn clamps_at_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InventoryItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::inventory_item::InventoryItemFactory::new(db)
        .stock(4, 2)
        .build()
        .await?;

    let repo = InventoryItemRepository::new(db);
    let item = repo.adjust_quantity(stored.id, -10).await?.unwrap();

    assert_eq!(item.quantity_on_hand, 0);
    assert!(repo.adjust_quantity(9999, 1).await?.is_none());

    Ok(())
}
