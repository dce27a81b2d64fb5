//! Figures for the admin dashboard and analytics endpoints.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{order::OrderStatus, reservation::ReservationStatus},
    server::{
        data::{
            menu_item::MenuItemRepository, order::OrderRepository, report::ReportRepository,
            reservation::ReservationRepository,
        },
        error::AppError,
        model::{
            order::Order,
            report::{Dashboard, PopularItem, SalesDay},
            reservation::Reservation,
        },
        util::money,
    },
};

pub const MAX_LIMIT: u64 = 100;
pub const MAX_DAYS: i64 = 365;

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    /// Creates a new ReportService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the dashboard summary
    ///
    /// "Today" is the current UTC day. Revenue only counts paid orders and reservations
    /// are attributed to the day they are booked for.
    pub async fn dashboard(&self) -> Result<Dashboard, AppError> {
        let repo = ReportRepository::new(self.db);
        let today = start_of_day(Utc::now().date_naive());
        let week_ago = Utc::now() - Duration::days(7);

        let total_revenue = money::sum(
            repo.paid_orders(None)
                .await?
                .into_iter()
                .map(|(_, amount)| amount),
        )?;
        let today_revenue = money::sum(
            repo.paid_orders(Some(today))
                .await?
                .into_iter()
                .map(|(_, amount)| amount),
        )?;

        Ok(Dashboard {
            total_orders: repo.count_orders(None).await?,
            today_orders: repo.count_orders(Some(today)).await?,
            open_orders: repo.count_orders_with_status(&OrderStatus::open()).await?,
            total_revenue,
            today_revenue,
            total_reservations: repo.count_reservations().await?,
            today_reservations: repo
                .count_reservations_between(today, today + Duration::days(1))
                .await?,
            pending_reservations: repo
                .count_reservations_with_status(ReservationStatus::Pending)
                .await?,
            total_users: repo.count_users(None).await?,
            new_users_this_week: repo.count_users(Some(week_ago)).await?,
        })
    }

    /// Most recently placed orders, limit clamped to 1..=100
    pub async fn recent_orders(&self, limit: u64) -> Result<Vec<Order>, AppError> {
        OrderRepository::new(self.db)
            .recent(clamp_limit(limit))
            .await
    }

    /// Most recently booked reservations, limit clamped to 1..=100
    pub async fn recent_reservations(&self, limit: u64) -> Result<Vec<Reservation>, AppError> {
        ReservationRepository::new(self.db)
            .recent(clamp_limit(limit))
            .await
    }

    /// Menu items ranked by total units ordered, most popular first
    ///
    /// Items that were never ordered are left out; ties are broken by id.
    pub async fn popular_items(&self, limit: u64) -> Result<Vec<PopularItem>, AppError> {
        let units = ReportRepository::new(self.db)
            .units_ordered_by_menu_item()
            .await?;
        let menu_items = MenuItemRepository::new(self.db)
            .find_by_ids(units.keys().copied().collect())
            .await?;

        let mut popular: Vec<PopularItem> = menu_items
            .into_iter()
            .filter_map(|item| {
                units.get(&item.id).map(|&total_ordered| PopularItem {
                    id: item.id,
                    name: item.name,
                    price: item.price,
                    total_ordered,
                })
            })
            .collect();

        popular.sort_by(|a, b| {
            b.total_ordered
                .cmp(&a.total_ordered)
                .then_with(|| a.id.cmp(&b.id))
        });
        popular.truncate(clamp_limit(limit) as usize);

        Ok(popular)
    }

    /// Paid orders and revenue per UTC day, oldest first
    ///
    /// # Arguments
    /// - `days` - Look-back window from the start of today, clamped to 1..=365
    pub async fn sales_analytics(&self, days: i64) -> Result<Vec<SalesDay>, AppError> {
        let days = days.clamp(1, MAX_DAYS);
        let since = start_of_day(Utc::now().date_naive()) - Duration::days(days);

        let paid = ReportRepository::new(self.db).paid_orders(Some(since)).await?;

        sales_by_day(paid)
    }
}

fn clamp_limit(limit: u64) -> u64 {
    limit.clamp(1, MAX_LIMIT)
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn sales_by_day(paid: Vec<(DateTime<Utc>, f64)>) -> Result<Vec<SalesDay>, AppError> {
    let mut days: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
    for (created_at, amount) in paid {
        days.entry(created_at.date_naive()).or_default().push(amount);
    }

    days.into_iter()
        .map(|(date, amounts)| {
            Ok(SalesDay {
                date,
                order_count: amounts.len() as u64,
                revenue: money::sum(amounts)?,
            })
        })
        .collect()
}
