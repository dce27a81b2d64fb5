use crate::server::{
    error::AppError,
    model::inventory::{CreateInventoryItemParams, UpdateInventoryItemParams},
    service::inventory::InventoryService,
};
use entity::prelude::InventoryItem;
use test_utils::{builder::TestBuilder, factory};

fn new_item(sku: &str) -> CreateInventoryItemParams {
    CreateInventoryItemParams {
        name: "Basmati rice 25kg".to_string(),
        sku: sku.to_string(),
        category: "dry goods".to_string(),
        supplier: Some("Accra Wholesale".to_string()),
        unit_cost: 310.0,
        quantity_on_hand: 4,
        par_level: 6,
        auto_reorder: true,
    }
}

/// Tests adding a stock item below its par level.
///
/// Expected: Ok with the item flagged for reorder
#[tokio::test]
async fn creates_item() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(InventoryItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let item = InventoryService::new(db).create(new_item("RICE-25")).await?;

    assert_eq!(item.sku, "RICE-25");
    assert!(item.needs_reorder());

    Ok(())
}

/// Tests reusing a SKU on create and update.
///
/// Expected: Err(AppError::Conflict) both times; keeping an item's own SKU is fine
#[tokio::test]
async fn rejects_duplicate_sku() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(InventoryItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let existing = factory::inventory_item::InventoryItemFactory::new(db)
        .sku("OIL-5L")
        .build()
        .await?;
    let other = factory::create_inventory_item(db).await?;
    let service = InventoryService::new(db);

    let created = service.create(new_item("OIL-5L")).await;
    assert!(matches!(created, Err(AppError::Conflict(_))));

    let moved = service
        .update(
            other.id,
            UpdateInventoryItemParams {
                sku: Some("OIL-5L".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(moved, Err(AppError::Conflict(_))));

    let kept = service
        .update(
            existing.id,
            UpdateInventoryItemParams {
                sku: Some("OIL-5L".to_string()),
                par_level: Some(3),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(kept.par_level, 3);

    Ok(())
}

/// Tests negative costs and counts.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_negative_values() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(InventoryItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = InventoryService::new(db);

    let cost = service
        .create(CreateInventoryItemParams {
            unit_cost: -1.0,
            ..new_item("NEG-1")
        })
        .await;
    assert!(matches!(cost, Err(AppError::BadRequest(_))));

    let stock = service
        .create(CreateInventoryItemParams {
            quantity_on_hand: -3,
            ..new_item("NEG-2")
        })
        .await;
    assert!(matches!(stock, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a stock adjustment larger than the quantity on hand.
///
/// Expected: Ok with quantity clamped to zero
#[tokio::test]
async fn adjust_clamps_at_zero() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(InventoryItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let item = factory::inventory_item::InventoryItemFactory::new(db)
        .stock(5, 2)
        .build()
        .await?;
    let service = InventoryService::new(db);

    let restocked = service.adjust(item.id, 10).await?;
    assert_eq!(restocked.quantity_on_hand, 15);

    let emptied = service.adjust(item.id, -40).await?;
    assert_eq!(emptied.quantity_on_hand, 0);
    assert!(emptied.needs_reorder());

    let missing = service.adjust(item.id + 100, 1).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}
