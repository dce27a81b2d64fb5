use chrono::{Duration, Utc};

use crate::server::{error::AppError, service::report::ReportService};
use test_utils::{builder::TestBuilder, factory};

/// Tests the dashboard figures over a mix of orders, reservations and users.
///
/// Expected: Ok with counts split by today, open status and payment
#[tokio::test]
async fn builds_dashboard() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let three_days_ago = Utc::now() - Duration::days(3);
    let customer = factory::create_user(db).await?;
    factory::user::UserFactory::new(db)
        .created_at(Utc::now() - Duration::days(30))
        .build()
        .await?;

    factory::order::OrderFactory::new(db, customer.id)
        .payment_status("paid")
        .totals(20.0, 0.0, 0.0)
        .build()
        .await?;
    factory::order::OrderFactory::new(db, customer.id)
        .status("delivered")
        .payment_status("paid")
        .totals(15.5, 0.0, 0.0)
        .created_at(three_days_ago)
        .build()
        .await?;
    factory::order::OrderFactory::new(db, customer.id)
        .status("confirmed")
        .build()
        .await?;
    factory::order::OrderFactory::new(db, customer.id)
        .status("cancelled")
        .created_at(three_days_ago)
        .build()
        .await?;

    factory::reservation::ReservationFactory::new(db, customer.id)
        .reservation_date(Utc::now())
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, customer.id)
        .status("confirmed")
        .build()
        .await?;

    let dashboard = ReportService::new(db).dashboard().await?;

    assert_eq!(dashboard.total_orders, 4);
    assert_eq!(dashboard.today_orders, 2);
    assert_eq!(dashboard.open_orders, 2);
    assert_eq!(dashboard.total_revenue, 35.5);
    assert_eq!(dashboard.today_revenue, 20.0);
    assert_eq!(dashboard.total_reservations, 2);
    assert_eq!(dashboard.today_reservations, 1);
    assert_eq!(dashboard.pending_reservations, 1);
    assert_eq!(dashboard.total_users, 2);
    assert_eq!(dashboard.new_users_this_week, 1);

    Ok(())
}

/// Tests ranking menu items by units ordered.
///
/// Expected: Ok with the most ordered item first and unordered items left out
#[tokio::test]
async fn ranks_popular_items() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let customer = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let rice = factory::menu_item::MenuItemFactory::new(db, category.id)
        .name("Jollof Rice")
        .build()
        .await?;
    let stew = factory::menu_item::MenuItemFactory::new(db, category.id)
        .name("Groundnut Soup")
        .build()
        .await?;
    factory::create_menu_item(db, category.id).await?;

    let first = factory::create_order(db, customer.id).await?;
    factory::create_order_item(db, first.id, &rice, 1).await?;
    factory::create_order_item(db, first.id, &stew, 5).await?;
    let second = factory::create_order(db, customer.id).await?;
    factory::create_order_item(db, second.id, &rice, 2).await?;

    let popular = ReportService::new(db).popular_items(10).await?;

    assert_eq!(popular.len(), 2);
    assert_eq!(popular[0].name, "Groundnut Soup");
    assert_eq!(popular[0].total_ordered, 5);
    assert_eq!(popular[1].id, rice.id);
    assert_eq!(popular[1].total_ordered, 3);

    let top = ReportService::new(db).popular_items(1).await?;
    assert_eq!(top.len(), 1);

    Ok(())
}

/// Tests daily sales over the look-back window.
///
/// Expected: Ok with one entry per day holding paid orders, oldest first
#[tokio::test]
async fn groups_sales_by_day() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let customer = factory::create_user(db).await?;
    let two_days_ago = Utc::now() - Duration::days(2);

    for (created_at, subtotal) in [
        (two_days_ago, 12.5),
        (two_days_ago, 7.5),
        (Utc::now(), 30.0),
        (Utc::now() - Duration::days(45), 99.0),
    ] {
        factory::order::OrderFactory::new(db, customer.id)
            .payment_status("paid")
            .totals(subtotal, 0.0, 0.0)
            .created_at(created_at)
            .build()
            .await?;
    }
    factory::order::OrderFactory::new(db, customer.id)
        .totals(50.0, 0.0, 0.0)
        .build()
        .await?;

    let sales = ReportService::new(db).sales_analytics(30).await?;

    assert_eq!(sales.len(), 2);
    assert_eq!(sales[0].date, two_days_ago.date_naive());
    assert_eq!(sales[0].order_count, 2);
    assert_eq!(sales[0].revenue, 20.0);
    assert_eq!(sales[1].date, Utc::now().date_naive());
    assert_eq!(sales[1].revenue, 30.0);

    Ok(())
}

/// Tests the recent listings with an out-of-range limit.
///
/// Expected: Ok with at least one row returned for a zero limit
#[tokio::test]
async fn clamps_recent_listing_limits() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let customer = factory::create_user(db).await?;
    factory::create_order(db, customer.id).await?;
    factory::create_order(db, customer.id).await?;
    factory::create_reservation(db, customer.id).await?;

    let service = ReportService::new(db);

    assert_eq!(service.recent_orders(0).await?.len(), 1);
    assert_eq!(service.recent_orders(500).await?.len(), 2);
    assert_eq!(service.recent_reservations(10).await?.len(), 1);

    Ok(())
}
