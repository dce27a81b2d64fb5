use crate::{
    model::{order::OrderStatus, reservation::ReservationStatus},
    server::data::report::ReportRepository,
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod counts;
mod units_ordered_by_menu_item;
