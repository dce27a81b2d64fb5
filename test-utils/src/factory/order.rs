//! Order and order item factories.
//!
//! Factory orders are inserted as-is; totals are whatever the test sets and are not
//! recomputed from the items.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating orders for an existing customer.
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    customer_id: i32,
    order_number: String,
    order_type: String,
    status: String,
    payment_status: String,
    subtotal: f64,
    tax_amount: f64,
    service_charge: f64,
    created_at: DateTime<Utc>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory.
    ///
    /// Defaults:
    /// - order_number: `"ORD-{id:08X}"`
    /// - order_type: `"takeout"`
    /// - status and payment_status: `"pending"`
    /// - totals: subtotal `10.00`, no tax or service charge
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, customer_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            customer_id,
            order_number: format!("ORD-{:08X}", id),
            order_type: "takeout".to_string(),
            status: "pending".to_string(),
            payment_status: "pending".to_string(),
            subtotal: 10.0,
            tax_amount: 0.0,
            service_charge: 0.0,
            created_at: Utc::now(),
        }
    }

    pub fn order_type(mut self, order_type: impl Into<String>) -> Self {
        self.order_type = order_type.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn payment_status(mut self, payment_status: impl Into<String>) -> Self {
        self.payment_status = payment_status.into();
        self
    }

    /// Sets subtotal, tax and service charge; the total is their sum.
    pub fn totals(mut self, subtotal: f64, tax_amount: f64, service_charge: f64) -> Self {
        self.subtotal = subtotal;
        self.tax_amount = tax_amount;
        self.service_charge = service_charge;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the order.
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let total = self.subtotal + self.tax_amount + self.service_charge;
        entity::order::ActiveModel {
            id: ActiveValue::NotSet,
            order_number: ActiveValue::Set(self.order_number),
            customer_id: ActiveValue::Set(self.customer_id),
            order_type: ActiveValue::Set(self.order_type),
            status: ActiveValue::Set(self.status),
            payment_status: ActiveValue::Set(self.payment_status),
            subtotal: ActiveValue::Set(self.subtotal),
            tax_amount: ActiveValue::Set(self.tax_amount),
            service_charge: ActiveValue::Set(self.service_charge),
            total_amount: ActiveValue::Set(total),
            delivery_address: ActiveValue::Set(None),
            delivery_notes: ActiveValue::Set(None),
            table_number: ActiveValue::Set(None),
            estimated_ready_time: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending takeout order for the customer.
pub async fn create_order(
    db: &DatabaseConnection,
    customer_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, customer_id).build().await
}

/// Adds a line for `menu_item` to an order, snapshotting its name and price.
pub async fn create_order_item(
    db: &DatabaseConnection,
    order_id: i32,
    menu_item: &entity::menu_item::Model,
    quantity: i32,
) -> Result<entity::order_item::Model, DbErr> {
    entity::order_item::ActiveModel {
        id: ActiveValue::NotSet,
        order_id: ActiveValue::Set(order_id),
        menu_item_id: ActiveValue::Set(Some(menu_item.id)),
        item_name: ActiveValue::Set(menu_item.name.clone()),
        quantity: ActiveValue::Set(quantity),
        unit_price: ActiveValue::Set(menu_item.price),
        total_price: ActiveValue::Set(menu_item.price * quantity as f64),
        special_instructions: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
