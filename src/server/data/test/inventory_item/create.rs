use super::*;

/// Tests creating an inventory item and finding it by SKU.
///
/// Expected: Ok(InventoryItem) findable by SKU, flagged for reorder at par
#[tokio::test]
async fn creates_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InventoryItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InventoryItemRepository::new(db);
    let item = repo
        .create(CreateInventoryItemParams {
            name: "Basmati Rice".to_string(),
            sku: "RICE-001".to_string(),
            category: "dry goods".to_string(),
            supplier: Some("Accra Wholesale".to_string()),
            unit_cost: 2.5,
            quantity_on_hand: 10,
            par_level: 10,
            auto_reorder: false,
        })
        .await?;

    assert!(item.needs_reorder());
    assert_eq!(repo.find_by_sku("RICE-001").await?, Some(item));
    assert!(repo.find_by_sku("RICE-002").await?.is_none());

    Ok(())
}

/// Tests a partial update followed by a delete.
///
/// Expected: supplier changed; delete true then false
#[tokio::test]
async fn updates_and_deletes_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::InventoryItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_inventory_item(db).await?;

    let repo = InventoryItemRepository::new(db);
    let updated = repo
        .update(
            stored.id,
            UpdateInventoryItemParams {
                supplier: Some("Kumasi Farms".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.supplier.as_deref(), Some("Kumasi Farms"));
    assert_eq!(updated.sku, stored.sku);
    assert!(repo.delete(stored.id).await?);
    assert!(!repo.delete(stored.id).await?);

    Ok(())
}
