//! Table availability search and reservation confirmation.
//!
//! The dining room is the fixed `TABLES` list. A table is free at a slot when it seats the
//! party and no pending or confirmed reservation holds it, by name, at that date and
//! minute. When nothing is free the evening is scanned for alternatives.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::reservation::ReservationStatus,
    server::{
        data::reservation::ReservationRepository,
        error::AppError,
        model::{
            availability::{
                AlternativeSlot, Availability, ConfirmReservationParams, Confirmation, Table,
                TABLES,
            },
            reservation::CreateReservationParams,
            user::User,
        },
        service::reservation::{check_future, check_party_size, to_slot},
    },
};

const MAX_ALTERNATIVES: usize = 4;
const SLOT_MINUTES: i64 = 30;

/// Evening service window scanned for alternatives, inclusive.
fn service_hours() -> (NaiveTime, NaiveTime) {
    (
        NaiveTime::from_hms_opt(17, 0, 0).unwrap_or(NaiveTime::MIN),
        NaiveTime::from_hms_opt(22, 0, 0).unwrap_or(NaiveTime::MIN),
    )
}

/// Table names held per slot.
type Holds = HashMap<DateTime<Utc>, HashSet<String>>;

pub struct AvailabilityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AvailabilityService<'a> {
    /// Creates a new AvailabilityService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The dining room's tables.
    pub fn tables(&self) -> Vec<Table> {
        TABLES.to_vec()
    }

    /// Checks whether a table is free for a party at a date and time.
    ///
    /// # Arguments
    /// - `date` - `YYYY-MM-DD`
    /// - `time` - `HH:MM`
    /// - `party_size` - Guests, 1..=12
    ///
    /// # Returns
    /// - `Ok(Availability)` - Best fitting table, or up to four alternative slots
    /// - `Err(AppError::BadRequest)` - Malformed date or time, or party size out of range
    pub async fn check(
        &self,
        date: &str,
        time: &str,
        party_size: i32,
    ) -> Result<Availability, AppError> {
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| {
            AppError::BadRequest("Invalid date format. Use YYYY-MM-DD".to_string())
        })?;
        let time = NaiveTime::parse_from_str(time.trim(), "%H:%M")
            .map_err(|_| AppError::BadRequest("Invalid time format. Use HH:MM".to_string()))?;
        check_party_size(party_size)?;

        let holds = self.holds_on(date).await?;
        let requested = date.and_time(time).and_utc();

        if let Some(table) = best_table(&free_tables(&holds, requested, party_size)) {
            return Ok(Availability {
                table: Some(table),
                alternatives: Vec::new(),
                message: format!(
                    "Table for {} available at {}",
                    party_size,
                    time.format("%H:%M")
                ),
            });
        }

        let alternatives = alternatives(&holds, date, time, party_size);
        let message = if alternatives.is_empty() {
            format!(
                "No tables available for {} people on {}",
                party_size,
                date.format("%Y-%m-%d")
            )
        } else {
            let times: Vec<String> = alternatives
                .iter()
                .take(2)
                .map(|slot| slot.time.format("%H:%M").to_string())
                .collect();
            format!(
                "No table available at {}, but available at {}",
                time.format("%H:%M"),
                times.join(" or ")
            )
        };

        Ok(Availability {
            table: None,
            alternatives,
            message,
        })
    }

    /// Books a specific table after re-checking that it is still free.
    ///
    /// # Returns
    /// - `Ok(Confirmation)` - Confirmed reservation holding the table
    /// - `Err(AppError::BadRequest)` - Unknown table, invalid party size or past date
    /// - `Err(AppError::Conflict)` - Table taken or too small for the party
    pub async fn confirm(
        &self,
        customer: &User,
        params: ConfirmReservationParams,
    ) -> Result<Confirmation, AppError> {
        let reservation_date = to_slot(params.reservation_date);
        check_party_size(params.party_size)?;
        check_future(reservation_date)?;

        let Some(table) = TABLES.iter().copied().find(|t| t.id == params.table_id) else {
            return Err(AppError::BadRequest(format!(
                "Unknown table {}",
                params.table_id
            )));
        };

        let holds = self.holds_on(reservation_date.date_naive()).await?;
        let free = free_tables(&holds, reservation_date, params.party_size);
        if !free.iter().any(|t| t.id == table.id) {
            return Err(AppError::Conflict(
                "Table is no longer available. Please select a different time.".to_string(),
            ));
        }

        let reservation = ReservationRepository::new(self.db)
            .create(CreateReservationParams {
                customer_id: customer.id,
                reservation_date,
                party_size: params.party_size,
                status: ReservationStatus::Confirmed,
                table_number: Some(table.name.to_string()),
                special_requests: params.special_requests,
                occasion: params.occasion,
            })
            .await?;

        tracing::info!(
            "Reservation {} confirmed at {} for user {}",
            reservation.id,
            table.name,
            customer.id
        );

        Ok(Confirmation {
            reservation,
            table,
            customer_name: customer.name.clone(),
        })
    }

    /// Loads every table hold on a UTC calendar day.
    async fn holds_on(&self, date: NaiveDate) -> Result<Holds, AppError> {
        let start = date.and_time(NaiveTime::MIN).and_utc();
        let end = start + Duration::days(1);

        let mut holds = Holds::new();
        for (slot, table) in ReservationRepository::new(self.db)
            .held_tables_between(start, end)
            .await?
        {
            holds.entry(to_slot(slot)).or_default().insert(table);
        }

        Ok(holds)
    }
}

fn free_tables(holds: &Holds, slot: DateTime<Utc>, party_size: i32) -> Vec<Table> {
    let held = holds.get(&slot);
    TABLES
        .iter()
        .copied()
        .filter(|table| table.capacity >= party_size)
        .filter(|table| held.is_none_or(|held| !held.contains(table.name)))
        .collect()
}

/// Smallest table that fits; the lowest id wins ties.
fn best_table(tables: &[Table]) -> Option<Table> {
    tables
        .iter()
        .copied()
        .min_by_key(|table| (table.capacity, table.id))
}

fn alternatives(
    holds: &Holds,
    date: NaiveDate,
    requested: NaiveTime,
    party_size: i32,
) -> Vec<AlternativeSlot> {
    let (open, close) = service_hours();
    let mut slots = Vec::new();
    let mut time = open;

    while time <= close && slots.len() < MAX_ALTERNATIVES {
        if time != requested {
            let available_tables =
                free_tables(holds, date.and_time(time).and_utc(), party_size).len();
            if available_tables > 0 {
                slots.push(AlternativeSlot {
                    time,
                    available_tables,
                });
            }
        }
        time += Duration::minutes(SLOT_MINUTES);
    }

    slots
}
