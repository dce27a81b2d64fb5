//! Order placement and staff order management.
//!
//! Prices are always taken from the menu at the moment the order is placed. Totals are
//! computed in `Decimal` with the configured tax and service-charge rates.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::order::OrderType,
    server::{
        data::{
            menu_item::MenuItemRepository,
            order::{OrderFilter, OrderRepository},
        },
        error::AppError,
        model::{
            order::{CreateOrderParams, NewOrder, NewOrderItem, Order, UpdateOrderParams},
            Page,
        },
        util::money,
    },
};

/// Largest quantity of a single menu item on one order line.
pub const MAX_LINE_QUANTITY: i32 = 99;

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
    tax_rate: f64,
    service_charge_rate: f64,
}

impl<'a> OrderService<'a> {
    /// Creates a new OrderService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tax_rate` - Fraction of the subtotal charged as tax, e.g. `0.08`
    /// - `service_charge_rate` - Fraction of the subtotal charged as service, e.g. `0.10`
    pub fn new(db: &'a DatabaseConnection, tax_rate: f64, service_charge_rate: f64) -> Self {
        Self {
            db,
            tax_rate,
            service_charge_rate,
        }
    }

    /// Places an order.
    ///
    /// Every line must reference an existing, available menu item with a quantity in
    /// `1..=99`, and delivery orders need an address. Lines snapshot the item's current
    /// name and price.
    ///
    /// # Returns
    /// - `Ok(Order)` - The stored order with items and totals
    /// - `Err(AppError::BadRequest)` - Empty order, bad quantity, missing address, or an
    ///   unknown or unavailable menu item
    pub async fn create(&self, params: CreateOrderParams) -> Result<Order, AppError> {
        if params.lines.is_empty() {
            return Err(AppError::BadRequest(
                "Order must contain at least one item".to_string(),
            ));
        }

        if let Some(line) = params
            .lines
            .iter()
            .find(|line| !(1..=MAX_LINE_QUANTITY).contains(&line.quantity))
        {
            return Err(AppError::BadRequest(format!(
                "Quantity for menu item {} must be between 1 and {}",
                line.menu_item_id, MAX_LINE_QUANTITY
            )));
        }

        let delivery_address = params
            .delivery_address
            .map(|address| address.trim().to_string())
            .filter(|address| !address.is_empty());
        if params.order_type == OrderType::Delivery && delivery_address.is_none() {
            return Err(AppError::BadRequest(
                "Delivery address is required for delivery orders".to_string(),
            ));
        }

        let mut ids: Vec<i32> = params.lines.iter().map(|line| line.menu_item_id).collect();
        ids.sort_unstable();
        ids.dedup();
        let menu_items: HashMap<i32, _> = MenuItemRepository::new(self.db)
            .find_by_ids(ids)
            .await?
            .into_iter()
            .map(|item| (item.id, item))
            .collect();

        let mut items = Vec::with_capacity(params.lines.len());
        let mut line_totals = Vec::with_capacity(params.lines.len());
        for line in params.lines {
            let Some(menu_item) = menu_items.get(&line.menu_item_id) else {
                return Err(AppError::BadRequest(format!(
                    "Menu item {} not found",
                    line.menu_item_id
                )));
            };
            if !menu_item.is_available {
                return Err(AppError::BadRequest(format!(
                    "{} is not available",
                    menu_item.name
                )));
            }

            let total = money::line_total(menu_item.price, line.quantity)?;
            line_totals.push(total);
            items.push(NewOrderItem {
                menu_item_id: menu_item.id,
                item_name: menu_item.name.clone(),
                quantity: line.quantity,
                unit_price: menu_item.price,
                total_price: money::to_f64(total),
                special_instructions: line.special_instructions,
            });
        }

        let totals = money::order_totals(&line_totals, self.tax_rate, self.service_charge_rate)?;

        let order = OrderRepository::new(self.db)
            .create(NewOrder {
                order_number: generate_order_number(),
                customer_id: params.customer_id,
                order_type: params.order_type,
                subtotal: totals.subtotal,
                tax_amount: totals.tax_amount,
                service_charge: totals.service_charge,
                total_amount: totals.total_amount,
                delivery_address,
                delivery_notes: params.delivery_notes,
                table_number: params.table_number,
                estimated_ready_time: None,
                items,
            })
            .await?;

        tracing::info!(
            "Order {} placed by user {} for {:.2}",
            order.order_number,
            order.customer_id,
            order.total_amount
        );

        Ok(order)
    }

    pub async fn get(&self, id: i32) -> Result<Order, AppError> {
        OrderRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))
    }

    /// Lists orders newest first
    pub async fn get_paginated(
        &self,
        filter: OrderFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Order>, AppError> {
        let (orders, total) = OrderRepository::new(self.db)
            .get_paginated(filter, page, per_page)
            .await?;

        Ok(Page {
            items: orders,
            total,
            page,
            per_page,
        })
    }

    /// Applies a staff update. Any status may be set from any other.
    pub async fn update(&self, id: i32, params: UpdateOrderParams) -> Result<Order, AppError> {
        OrderRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))
    }

    /// Deletes an order with its items and payment
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !OrderRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Order not found".to_string()));
        }

        tracing::info!("Order {} deleted", id);

        Ok(())
    }
}

/// `ORD-` followed by eight random upper-case hex digits.
fn generate_order_number() -> String {
    format!("ORD-{:08X}", rand::random::<u32>())
}
