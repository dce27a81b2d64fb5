use super::*;

/// Tests that deleting a menu item keeps past order lines intact.
///
/// Verifies that the order line survives with its name snapshot and a cleared
/// `menu_item_id`.
///
/// Expected: Ok(true), order line still present with `menu_item_id == None`
#[tokio::test]
async fn detaches_order_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item, order) = factory::helpers::create_order_with_dependencies(db).await?;

    let repo = MenuItemRepository::new(db);
    assert!(repo.delete(item.id).await?);
    assert!(repo.find_by_id(item.id).await?.is_none());

    let lines = entity::prelude::OrderItem::find().all(db).await?;
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].order_id, order.id);
    assert_eq!(lines[0].menu_item_id, None);
    assert_eq!(lines[0].item_name, item.name);

    Ok(())
}

/// Tests deleting a missing menu item.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MenuItemRepository::new(db);

    assert!(!repo.delete(123).await?);

    Ok(())
}
