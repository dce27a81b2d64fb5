use super::*;

/// Tests summing ordered units per menu item.
///
/// Expected: quantities summed across orders, keyed by menu item id
#[tokio::test]
async fn sums_units_per_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let (category, jollof) = factory::helpers::create_menu_item_with_category(db).await?;
    let kelewele = factory::create_menu_item(db, category.id).await?;
    let first = factory::create_order(db, customer.id).await?;
    let second = factory::create_order(db, customer.id).await?;
    factory::create_order_item(db, first.id, &jollof, 2).await?;
    factory::create_order_item(db, second.id, &jollof, 3).await?;
    factory::create_order_item(db, second.id, &kelewele, 1).await?;

    let repo = ReportRepository::new(db);
    let totals = repo.units_ordered_by_menu_item().await?;

    assert_eq!(totals.len(), 2);
    assert_eq!(totals.get(&jollof.id), Some(&5));
    assert_eq!(totals.get(&kelewele.id), Some(&1));

    Ok(())
}
