//! Order data repository.
//!
//! Orders are always loaded together with their line items. Creation writes the order and
//! every line in a single transaction so a partially written order is never visible.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::{
    model::order::{OrderStatus, PaymentStatus},
    server::{
        error::AppError,
        model::order::{NewOrder, Order, UpdateOrderParams},
    },
};

/// Filters applied when listing orders.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    /// Restrict to one customer's orders.
    pub customer_id: Option<i32>,
    pub status: Option<OrderStatus>,
}

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an order and its lines atomically.
    ///
    /// New orders start as `pending` with payment `pending`.
    ///
    /// # Returns
    /// - `Ok(Order)` - The stored order with its items
    /// - `Err(AppError::DbErr)` - Database error; nothing is written
    pub async fn create(&self, new_order: NewOrder) -> Result<Order, AppError> {
        let txn = self.db.begin().await?;

        let order = entity::order::ActiveModel {
            order_number: ActiveValue::Set(new_order.order_number),
            customer_id: ActiveValue::Set(new_order.customer_id),
            order_type: ActiveValue::Set(new_order.order_type.as_str().to_string()),
            status: ActiveValue::Set(OrderStatus::Pending.as_str().to_string()),
            payment_status: ActiveValue::Set(PaymentStatus::Pending.as_str().to_string()),
            subtotal: ActiveValue::Set(new_order.subtotal),
            tax_amount: ActiveValue::Set(new_order.tax_amount),
            service_charge: ActiveValue::Set(new_order.service_charge),
            total_amount: ActiveValue::Set(new_order.total_amount),
            delivery_address: ActiveValue::Set(new_order.delivery_address),
            delivery_notes: ActiveValue::Set(new_order.delivery_notes),
            table_number: ActiveValue::Set(new_order.table_number),
            estimated_ready_time: ActiveValue::Set(new_order.estimated_ready_time),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut items = Vec::with_capacity(new_order.items.len());
        for item in new_order.items {
            let item = entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                menu_item_id: ActiveValue::Set(Some(item.menu_item_id)),
                item_name: ActiveValue::Set(item.item_name),
                quantity: ActiveValue::Set(item.quantity),
                unit_price: ActiveValue::Set(item.unit_price),
                total_price: ActiveValue::Set(item.total_price),
                special_instructions: ActiveValue::Set(item.special_instructions),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            items.push(item);
        }

        txn.commit().await?;

        Order::from_entity(order, items)
    }

    /// Finds an order by id together with its items.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, AppError> {
        let Some(order) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let items = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.eq(id))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(Order::from_entity(order, items)?))
    }

    /// Lists orders newest first.
    ///
    /// # Arguments
    /// - `filter` - Optional customer and status restriction
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of orders per page
    ///
    /// # Returns
    /// - `Ok((orders, total))` - Orders with items for the page, and the total matching count
    pub async fn get_paginated(
        &self,
        filter: OrderFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Order>, u64), AppError> {
        let mut query = entity::prelude::Order::find();
        if let Some(customer_id) = filter.customer_id {
            query = query.filter(entity::order::Column::CustomerId.eq(customer_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::order::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let orders = paginator.fetch_page(page).await?;

        Ok((self.attach_items(orders).await?, total))
    }

    /// The most recently placed orders, newest first.
    pub async fn recent(&self, limit: u64) -> Result<Vec<Order>, AppError> {
        let orders = entity::prelude::Order::find()
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        self.attach_items(orders).await
    }

    /// Applies a staff update.
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - Updated order with items
    /// - `Ok(None)` - No order with that id
    pub async fn update(
        &self,
        id: i32,
        params: UpdateOrderParams,
    ) -> Result<Option<Order>, AppError> {
        let Some(entity) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::order::ActiveModel = entity.into();
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(payment_status) = params.payment_status {
            active.payment_status = ActiveValue::Set(payment_status.as_str().to_string());
        }
        if let Some(table_number) = params.table_number {
            active.table_number = ActiveValue::Set(Some(table_number));
        }
        if let Some(estimated_ready_time) = params.estimated_ready_time {
            active.estimated_ready_time = ActiveValue::Set(Some(estimated_ready_time));
        }
        active.updated_at = ActiveValue::Set(Some(Utc::now()));
        active.update(self.db).await?;

        self.find_by_id(id).await
    }

    /// Deletes an order with its items and payment.
    ///
    /// # Returns
    /// - `Ok(true)` - Order deleted
    /// - `Ok(false)` - No order with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::OrderItem::delete_many()
            .filter(entity::order_item::Column::OrderId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::Payment::delete_many()
            .filter(entity::payment::Column::OrderId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Order::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Loads items for a batch of orders with a single query, preserving order.
    async fn attach_items(
        &self,
        orders: Vec<entity::order::Model>,
    ) -> Result<Vec<Order>, AppError> {
        let ids: Vec<i32> = orders.iter().map(|order| order.id).collect();
        let mut items_by_order: HashMap<i32, Vec<entity::order_item::Model>> = HashMap::new();

        if !ids.is_empty() {
            let items = entity::prelude::OrderItem::find()
                .filter(entity::order_item::Column::OrderId.is_in(ids))
                .order_by_asc(entity::order_item::Column::Id)
                .all(self.db)
                .await?;
            for item in items {
                items_by_order.entry(item.order_id).or_default().push(item);
            }
        }

        orders
            .into_iter()
            .map(|order| {
                let items = items_by_order.remove(&order.id).unwrap_or_default();
                Order::from_entity(order, items)
            })
            .collect()
    }
}
