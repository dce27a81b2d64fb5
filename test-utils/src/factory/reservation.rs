//! Reservation factory.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating reservations for an existing customer.
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    customer_id: i32,
    reservation_date: DateTime<Utc>,
    party_size: i32,
    status: String,
    table_number: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory.
    ///
    /// Defaults:
    /// - reservation_date: three days from now
    /// - party_size: `2`
    /// - status: `"pending"`
    /// - no table assigned
    pub fn new(db: &'a DatabaseConnection, customer_id: i32) -> Self {
        Self {
            db,
            customer_id,
            reservation_date: Utc::now() + Duration::days(3),
            party_size: 2,
            status: "pending".to_string(),
            table_number: None,
            created_at: Utc::now(),
        }
    }

    pub fn reservation_date(mut self, reservation_date: DateTime<Utc>) -> Self {
        self.reservation_date = reservation_date;
        self
    }

    pub fn party_size(mut self, party_size: i32) -> Self {
        self.party_size = party_size;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn table_number(mut self, table_number: impl Into<String>) -> Self {
        self.table_number = Some(table_number.into());
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the reservation.
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            id: ActiveValue::NotSet,
            customer_id: ActiveValue::Set(self.customer_id),
            reservation_date: ActiveValue::Set(self.reservation_date),
            party_size: ActiveValue::Set(self.party_size),
            status: ActiveValue::Set(self.status),
            table_number: ActiveValue::Set(self.table_number),
            special_requests: ActiveValue::Set(None),
            occasion: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending reservation for two, three days out.
pub async fn create_reservation(
    db: &DatabaseConnection,
    customer_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, customer_id).build().await
}
