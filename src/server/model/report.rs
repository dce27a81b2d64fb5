//! Aggregated figures for the admin dashboard.

use chrono::NaiveDate;

use crate::model::admin::{
    DashboardDto, OrderStatsDto, PopularItemDto, ReservationStatsDto, RevenueStatsDto,
    SalesDayDto, UserStatsDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub total_orders: u64,
    pub today_orders: u64,
    pub open_orders: u64,
    pub total_revenue: f64,
    pub today_revenue: f64,
    pub total_reservations: u64,
    pub today_reservations: u64,
    pub pending_reservations: u64,
    pub total_users: u64,
    pub new_users_this_week: u64,
}

impl Dashboard {
    pub fn into_dto(self) -> DashboardDto {
        DashboardDto {
            orders: OrderStatsDto {
                total: self.total_orders,
                today: self.today_orders,
                pending: self.open_orders,
            },
            revenue: RevenueStatsDto {
                total: self.total_revenue,
                today: self.today_revenue,
            },
            reservations: ReservationStatsDto {
                total: self.total_reservations,
                today: self.today_reservations,
                pending: self.pending_reservations,
            },
            users: UserStatsDto {
                total: self.total_users,
                new_this_week: self.new_users_this_week,
            },
        }
    }
}

/// Menu item ranked by units ordered.
#[derive(Debug, Clone, PartialEq)]
pub struct PopularItem {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub total_ordered: i64,
}

impl PopularItem {
    pub fn into_dto(self) -> PopularItemDto {
        PopularItemDto {
            id: self.id,
            name: self.name,
            price: self.price,
            total_ordered: self.total_ordered,
        }
    }
}

/// Paid orders and revenue for one UTC day.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesDay {
    pub date: NaiveDate,
    pub order_count: u64,
    pub revenue: f64,
}

impl SalesDay {
    pub fn into_dto(self) -> SalesDayDto {
        SalesDayDto {
            date: self.date,
            order_count: self.order_count,
            revenue: self.revenue,
        }
    }
}
