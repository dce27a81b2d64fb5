use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct OrderStatsDto {
    pub total: u64,
    pub today: u64,
    /// Orders that are pending, confirmed or preparing.
    pub pending: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct RevenueStatsDto {
    pub total: f64,
    pub today: f64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct ReservationStatsDto {
    pub total: u64,
    pub today: u64,
    pub pending: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct UserStatsDto {
    pub total: u64,
    pub new_this_week: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct DashboardDto {
    pub orders: OrderStatsDto,
    pub revenue: RevenueStatsDto,
    pub reservations: ReservationStatsDto,
    pub users: UserStatsDto,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct PopularItemDto {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub total_ordered: i64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct SalesDayDto {
    pub date: NaiveDate,
    pub order_count: u64,
    pub revenue: f64,
}

#[derive(Deserialize, IntoParams, Debug, Clone)]
#[into_params(parameter_in = Query)]
pub struct LimitQuery {
    /// Maximum rows to return (default: 10, clamped to 1..=100)
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    10
}

#[derive(Deserialize, IntoParams, Debug, Clone)]
#[into_params(parameter_in = Query)]
pub struct DaysQuery {
    /// Number of days to look back (default: 30)
    #[serde(default = "default_days")]
    pub days: i64,
}

fn default_days() -> i64 {
    30
}
