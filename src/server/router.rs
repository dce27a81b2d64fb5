use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin::{self, ADMIN_TAG},
        auth::{self, AUTH_TAG},
        availability::{self, AVAILABILITY_TAG},
        category::{self, CATEGORY_TAG},
        health::{self, HEALTH_TAG},
        inventory::{self, INVENTORY_TAG},
        menu_item::{self, MENU_ITEM_TAG},
        order::{self, ORDER_TAG},
        payment::{self, PAYMENT_TAG},
        reservation::{self, RESERVATION_TAG},
        setting::{self, SETTING_TAG},
        user::{self, USER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "TastyBite Restaurant API",
        description = "Menu, ordering, payments, reservations and back-office management."
    ),
    tags(
        (name = HEALTH_TAG, description = "Service information"),
        (name = AUTH_TAG, description = "Registration and session login"),
        (name = USER_TAG, description = "User profiles"),
        (name = CATEGORY_TAG, description = "Menu categories"),
        (name = MENU_ITEM_TAG, description = "Menu items"),
        (name = ORDER_TAG, description = "Customer orders"),
        (name = PAYMENT_TAG, description = "Order payments"),
        (name = RESERVATION_TAG, description = "Table reservations"),
        (name = AVAILABILITY_TAG, description = "Table availability and instant booking"),
        (name = INVENTORY_TAG, description = "Stock management"),
        (name = ADMIN_TAG, description = "Reports and account administration"),
        (name = SETTING_TAG, description = "Restaurant settings"),
    )
)]
struct ApiDoc;

/// Builds every API route along with the OpenAPI document served at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::root))
        .routes(routes!(health::health))
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(user::get_me, user::update_me))
        .routes(routes!(user::get_users))
        .routes(routes!(user::get_user))
        .routes(routes!(category::get_categories, category::create_category))
        .routes(routes!(
            category::get_category,
            category::update_category,
            category::delete_category
        ))
        .routes(routes!(menu_item::get_menu_items, menu_item::create_menu_item))
        .routes(routes!(
            menu_item::get_menu_item,
            menu_item::update_menu_item,
            menu_item::delete_menu_item
        ))
        .routes(routes!(order::create_order, order::get_orders))
        .routes(routes!(order::get_my_orders))
        .routes(routes!(
            order::get_order,
            order::update_order,
            order::delete_order
        ))
        .routes(routes!(payment::start_payment, payment::get_payment))
        .routes(routes!(payment::confirm_payment))
        .routes(routes!(payment::refund_payment))
        .routes(routes!(
            reservation::create_reservation,
            reservation::get_reservations
        ))
        .routes(routes!(reservation::get_my_reservations))
        .routes(routes!(
            reservation::get_reservation,
            reservation::update_reservation,
            reservation::delete_reservation
        ))
        .routes(routes!(availability::get_tables))
        .routes(routes!(availability::check_availability))
        .routes(routes!(availability::confirm_reservation))
        .routes(routes!(
            inventory::get_inventory,
            inventory::create_inventory_item
        ))
        .routes(routes!(inventory::get_low_stock))
        .routes(routes!(
            inventory::get_inventory_item,
            inventory::update_inventory_item,
            inventory::delete_inventory_item
        ))
        .routes(routes!(inventory::adjust_stock))
        .routes(routes!(admin::get_dashboard))
        .routes(routes!(admin::get_recent_orders))
        .routes(routes!(admin::get_recent_reservations))
        .routes(routes!(admin::get_popular_items))
        .routes(routes!(admin::get_sales_analytics))
        .routes(routes!(admin::get_admin_users))
        .routes(routes!(admin::toggle_user_active))
        .routes(routes!(admin::set_user_role))
        .routes(routes!(setting::get_settings))
        .routes(routes!(setting::upsert_setting, setting::delete_setting))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
}
