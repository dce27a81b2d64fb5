use crate::{
    model::reservation::ReservationStatus,
    server::{
        data::reservation::ReservationRepository,
        error::AppError,
        model::reservation::{CreateReservationParams, UpdateReservationParams},
    },
};
use chrono::{Duration, TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod held_tables_between;
mod is_table_held;
mod recent;
mod update;
