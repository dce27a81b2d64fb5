use crate::server::{
    error::AppError,
    model::menu_item::{CreateMenuItemParams, MenuItemFilter, UpdateMenuItemParams},
    service::menu_item::MenuItemService,
};
use test_utils::{builder::TestBuilder, factory};

fn new_item(category_id: i32, price: f64) -> CreateMenuItemParams {
    CreateMenuItemParams {
        category_id,
        name: " Jollof Rice ".to_string(),
        description: Some("Smoky party jollof".to_string()),
        price,
        image_url: None,
        is_available: true,
        is_featured: false,
        calories: Some(650),
        preparation_time: Some(20),
    }
}

/// Tests creating a menu item in an existing category.
///
/// Expected: Ok with the trimmed name and the given price
#[tokio::test]
async fn creates_menu_item() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let category = factory::create_category(db).await?;

    let item = MenuItemService::new(db)
        .create(new_item(category.id, 45.0))
        .await?;

    assert_eq!(item.name, "Jollof Rice");
    assert_eq!(item.category_id, category.id);
    assert_eq!(item.price, 45.0);
    assert_eq!(item.calories, Some(650));

    Ok(())
}

/// Tests creating menu items with bad prices, negative counts or an unknown category.
///
/// Expected: Err(AppError::BadRequest) for each
#[tokio::test]
async fn rejects_invalid_menu_items() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let category = factory::create_category(db).await?;
    let service = MenuItemService::new(db);

    for price in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let result = service.create(new_item(category.id, price)).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    let negative_calories = service
        .create(CreateMenuItemParams {
            calories: Some(-1),
            ..new_item(category.id, 45.0)
        })
        .await;
    assert!(matches!(negative_calories, Err(AppError::BadRequest(_))));

    let unknown_category = service.create(new_item(category.id + 100, 45.0)).await;
    assert!(matches!(unknown_category, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a partial update.
///
/// Expected: Ok with only the given fields changed, BadRequest for a zero price
#[tokio::test]
async fn updates_menu_item() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, item) = factory::helpers::create_menu_item_with_category(db).await?;
    let service = MenuItemService::new(db);

    let updated = service
        .update(
            item.id,
            UpdateMenuItemParams {
                price: Some(12.5),
                is_featured: Some(true),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.price, 12.5);
    assert!(updated.is_featured);
    assert_eq!(updated.name, item.name);

    let free = service
        .update(
            item.id,
            UpdateMenuItemParams {
                price: Some(0.0),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(free, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests listing with the availability and featured filters.
///
/// Expected: each filter narrows the listing to matching items
#[tokio::test]
async fn filters_menu_items() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let category = factory::create_category(db).await?;
    let other = factory::create_category(db).await?;
    factory::menu_item::MenuItemFactory::new(db, category.id)
        .name("Banku")
        .build()
        .await?;
    factory::menu_item::MenuItemFactory::new(db, category.id)
        .name("Kelewele")
        .available(false)
        .build()
        .await?;
    factory::menu_item::MenuItemFactory::new(db, other.id)
        .name("Waakye")
        .featured(true)
        .build()
        .await?;
    let service = MenuItemService::new(db);

    let in_category = service
        .get_paginated(
            MenuItemFilter {
                category_id: Some(category.id),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(in_category.total, 2);

    let available = service
        .get_paginated(
            MenuItemFilter {
                category_id: Some(category.id),
                available_only: true,
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(available.items.len(), 1);
    assert_eq!(available.items[0].name, "Banku");

    let featured = service
        .get_paginated(
            MenuItemFilter {
                featured_only: true,
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(featured.items.len(), 1);
    assert_eq!(featured.items[0].name, "Waakye");

    Ok(())
}

/// Tests reading, updating and deleting a missing menu item.
///
/// Expected: Err(AppError::NotFound) for each
#[tokio::test]
async fn missing_menu_item_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = MenuItemService::new(db);

    assert!(matches!(service.get(7).await, Err(AppError::NotFound(_))));
    assert!(matches!(
        service.update(7, UpdateMenuItemParams::default()).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(service.delete(7).await, Err(AppError::NotFound(_))));

    Ok(())
}
