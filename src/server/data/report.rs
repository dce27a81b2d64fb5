//! Read-only aggregate queries backing the admin dashboard and analytics.
//!
//! Counts run in the database; sums and groupings are done here over the fetched rows so
//! money stays in the same `Decimal` arithmetic used everywhere else.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
};

use crate::model::{
    order::{OrderStatus, PaymentStatus},
    reservation::ReservationStatus,
};

pub struct ReportRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts orders, optionally only those created at or after `since`.
    pub async fn count_orders(&self, since: Option<DateTime<Utc>>) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Order::find();
        if let Some(since) = since {
            query = query.filter(entity::order::Column::CreatedAt.gte(since));
        }

        query.count(self.db).await
    }

    /// Counts orders whose status is one of `statuses`.
    pub async fn count_orders_with_status(&self, statuses: &[OrderStatus]) -> Result<u64, DbErr> {
        entity::prelude::Order::find()
            .filter(
                entity::order::Column::Status.is_in(statuses.iter().map(|status| status.as_str())),
            )
            .count(self.db)
            .await
    }

    /// Creation time and total of every paid order, optionally since a point in time.
    pub async fn paid_orders(
        &self,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<(DateTime<Utc>, f64)>, DbErr> {
        let mut query = entity::prelude::Order::find()
            .filter(entity::order::Column::PaymentStatus.eq(PaymentStatus::Paid.as_str()));
        if let Some(since) = since {
            query = query.filter(entity::order::Column::CreatedAt.gte(since));
        }

        let orders = query.all(self.db).await?;

        Ok(orders
            .into_iter()
            .map(|order| (order.created_at, order.total_amount))
            .collect())
    }

    pub async fn count_reservations(&self) -> Result<u64, DbErr> {
        entity::prelude::Reservation::find().count(self.db).await
    }

    /// Counts reservations whose reservation date falls in `[start, end)`.
    pub async fn count_reservations_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::ReservationDate.gte(start))
            .filter(entity::reservation::Column::ReservationDate.lt(end))
            .count(self.db)
            .await
    }

    pub async fn count_reservations_with_status(
        &self,
        status: ReservationStatus,
    ) -> Result<u64, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await
    }

    /// Counts users, optionally only those registered at or after `since`.
    pub async fn count_users(&self, since: Option<DateTime<Utc>>) -> Result<u64, DbErr> {
        let mut query = entity::prelude::User::find();
        if let Some(since) = since {
            query = query.filter(entity::user::Column::CreatedAt.gte(since));
        }

        query.count(self.db).await
    }

    /// Total units ordered per menu item that still exists.
    ///
    /// # Returns
    /// - `Ok(HashMap<menu_item_id, units>)` - Lines whose menu item was deleted are skipped
    pub async fn units_ordered_by_menu_item(&self) -> Result<HashMap<i32, i64>, DbErr> {
        let lines: Vec<(Option<i32>, i32)> = entity::prelude::OrderItem::find()
            .select_only()
            .column(entity::order_item::Column::MenuItemId)
            .column(entity::order_item::Column::Quantity)
            .filter(entity::order_item::Column::MenuItemId.is_not_null())
            .into_tuple()
            .all(self.db)
            .await?;

        let mut totals: HashMap<i32, i64> = HashMap::new();
        for (menu_item_id, quantity) in lines {
            if let Some(menu_item_id) = menu_item_id {
                *totals.entry(menu_item_id).or_default() += i64::from(quantity);
            }
        }

        Ok(totals)
    }
}
