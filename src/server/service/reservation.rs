//! Reservation booking and management.
//!
//! Reservation times are kept at minute precision so two bookings for the same table and
//! minute always collide.

use chrono::{DateTime, Duration, DurationRound, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::reservation::ReservationStatus,
    server::{
        data::reservation::{ReservationRepository, HOLDING_STATUSES},
        error::{auth::AuthError, AppError},
        model::{
            availability::TABLES,
            reservation::{CreateReservationParams, Reservation, UpdateReservationParams},
            user::User,
            Page,
        },
    },
};

pub const MAX_PARTY_SIZE: i32 = 12;

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    /// Creates a new ReservationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a reservation request.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The stored reservation
    /// - `Err(AppError::BadRequest)` - Party size outside 1..=12 or date not in the future
    pub async fn create(
        &self,
        mut params: CreateReservationParams,
    ) -> Result<Reservation, AppError> {
        params.reservation_date = to_slot(params.reservation_date);
        check_party_size(params.party_size)?;
        check_future(params.reservation_date)?;

        let reservation = ReservationRepository::new(self.db).create(params).await?;

        tracing::info!(
            "Reservation {} booked by user {} for {}",
            reservation.id,
            reservation.customer_id,
            reservation.reservation_date
        );

        Ok(reservation)
    }

    /// Gets a reservation by id.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - Reservation found
    /// - `Err(AppError::NotFound)` - No reservation with that id
    pub async fn get(&self, id: i32) -> Result<Reservation, AppError> {
        ReservationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))
    }

    /// Lists reservations, latest date first.
    ///
    /// # Arguments
    /// - `customer_id` - Restrict to one customer, or `None` for all
    pub async fn get_paginated(
        &self,
        customer_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Reservation>, AppError> {
        let (reservations, total) = ReservationRepository::new(self.db)
            .get_paginated(customer_id, page, per_page)
            .await?;

        Ok(Page {
            items: reservations,
            total,
            page,
            per_page,
        })
    }

    /// Applies a partial update.
    ///
    /// Customers may reschedule, resize, annotate or cancel their own reservation; assigning
    /// a table or any other status is reserved for staff. When the result still holds a
    /// table at a new time, size or table, the table must be free and large enough.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - Updated reservation
    /// - `Err(AppError::AuthErr(AccessDenied))` - Non-staff setting a table or status
    /// - `Err(AppError::BadRequest)` - Invalid party size or past date
    /// - `Err(AppError::Conflict)` - Table held by another reservation or too small
    /// - `Err(AppError::NotFound)` - No reservation with that id
    pub async fn update(
        &self,
        id: i32,
        mut params: UpdateReservationParams,
        editor: &User,
    ) -> Result<Reservation, AppError> {
        if !editor.is_staff() {
            let sets_table = params.table_number.is_some();
            let sets_status = params
                .status
                .is_some_and(|status| status != ReservationStatus::Cancelled);
            if sets_table || sets_status {
                return Err(AuthError::AccessDenied(
                    editor.id,
                    "Only staff may assign tables or change reservation status".to_string(),
                )
                .into());
            }
        }

        if let Some(party_size) = params.party_size {
            check_party_size(party_size)?;
        }
        if let Some(reservation_date) = params.reservation_date {
            let reservation_date = to_slot(reservation_date);
            check_future(reservation_date)?;
            params.reservation_date = Some(reservation_date);
        }

        let current = self.get(id).await?;
        self.check_table(&current, &params).await?;

        ReservationRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))
    }

    /// Re-checks the table the updated reservation would hold.
    async fn check_table(
        &self,
        current: &Reservation,
        params: &UpdateReservationParams,
    ) -> Result<(), AppError> {
        let status = params.status.unwrap_or(current.status);
        let Some(table) = params
            .table_number
            .as_deref()
            .or(current.table_number.as_deref())
        else {
            return Ok(());
        };
        let moves = params.reservation_date.is_some()
            || params.party_size.is_some()
            || params.table_number.is_some();
        if !HOLDING_STATUSES.contains(&status) || !moves {
            return Ok(());
        }

        let party_size = params.party_size.unwrap_or(current.party_size);
        if let Some(known) = TABLES.iter().find(|known| known.name == table) {
            if known.capacity < party_size {
                return Err(AppError::Conflict(format!(
                    "{} seats only {} guests",
                    known.name, known.capacity
                )));
            }
        }

        let slot = params
            .reservation_date
            .unwrap_or_else(|| to_slot(current.reservation_date));
        if ReservationRepository::new(self.db)
            .is_table_held(table, slot, Some(current.id))
            .await?
        {
            return Err(AppError::Conflict(
                "Table is no longer available. Please select a different time.".to_string(),
            ));
        }

        Ok(())
    }

    /// Deletes a reservation.
    ///
    /// # Returns
    /// - `Ok(())` - Reservation deleted
    /// - `Err(AppError::NotFound)` - No reservation with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ReservationRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Reservation not found".to_string()));
        }

        Ok(())
    }
}

/// Drops seconds and sub-seconds from a reservation time.
pub fn to_slot(reservation_date: DateTime<Utc>) -> DateTime<Utc> {
    reservation_date
        .duration_trunc(Duration::minutes(1))
        .unwrap_or(reservation_date)
}

pub fn check_party_size(party_size: i32) -> Result<(), AppError> {
    if !(1..=MAX_PARTY_SIZE).contains(&party_size) {
        return Err(AppError::BadRequest(format!(
            "Party size must be between 1 and {MAX_PARTY_SIZE}"
        )));
    }
    Ok(())
}

pub fn check_future(reservation_date: DateTime<Utc>) -> Result<(), AppError> {
    if reservation_date <= Utc::now() {
        return Err(AppError::BadRequest(
            "Reservation date must be in the future".to_string(),
        ));
    }
    Ok(())
}
