//! Restaurant floor plan and availability results.

use chrono::{DateTime, NaiveTime, Utc};

use crate::{
    model::reservation::{
        AlternativeSlotDto, AvailabilityResponseDto, ConfirmReservationDto,
        ReservationConfirmationDto, TableDto,
    },
    server::model::reservation::Reservation,
};

/// A physical table in the dining room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    pub id: i32,
    pub name: &'static str,
    pub capacity: i32,
    pub kind: &'static str,
}

impl Table {
    pub fn into_dto(self) -> TableDto {
        TableDto {
            id: self.id,
            name: self.name.to_string(),
            capacity: self.capacity,
            kind: self.kind.to_string(),
        }
    }
}

/// The dining room. Reservations reference tables by `name`.
pub const TABLES: [Table; 8] = [
    Table {
        id: 1,
        name: "Table 1",
        capacity: 2,
        kind: "window",
    },
    Table {
        id: 2,
        name: "Table 2",
        capacity: 4,
        kind: "standard",
    },
    Table {
        id: 3,
        name: "Table 3",
        capacity: 4,
        kind: "booth",
    },
    Table {
        id: 4,
        name: "Table 4",
        capacity: 6,
        kind: "large",
    },
    Table {
        id: 5,
        name: "Table 5",
        capacity: 8,
        kind: "private",
    },
    Table {
        id: 6,
        name: "Table 6",
        capacity: 2,
        kind: "bar",
    },
    Table {
        id: 7,
        name: "Table 7",
        capacity: 4,
        kind: "patio",
    },
    Table {
        id: 8,
        name: "Table 8",
        capacity: 6,
        kind: "standard",
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct AlternativeSlot {
    pub time: NaiveTime,
    pub available_tables: usize,
}

/// Outcome of an availability check.
#[derive(Debug, Clone, PartialEq)]
pub struct Availability {
    /// Best fitting free table at the requested slot.
    pub table: Option<Table>,
    /// Empty when `table` is set.
    pub alternatives: Vec<AlternativeSlot>,
    pub message: String,
}

impl Availability {
    pub fn into_dto(self) -> AvailabilityResponseDto {
        AvailabilityResponseDto {
            available: self.table.is_some(),
            table_id: self.table.map(|t| t.id),
            table_name: self.table.map(|t| t.name.to_string()),
            message: self.message,
            alternatives: self
                .alternatives
                .into_iter()
                .map(|slot| AlternativeSlotDto {
                    time: slot.time.format("%H:%M").to_string(),
                    available_tables: slot.available_tables,
                })
                .collect(),
        }
    }
}

/// Request to hold a specific table.
#[derive(Debug, Clone)]
pub struct ConfirmReservationParams {
    pub reservation_date: DateTime<Utc>,
    pub party_size: i32,
    pub special_requests: Option<String>,
    pub occasion: Option<String>,
    pub table_id: i32,
}

impl From<ConfirmReservationDto> for ConfirmReservationParams {
    fn from(dto: ConfirmReservationDto) -> Self {
        Self {
            reservation_date: dto.reservation_date,
            party_size: dto.party_size,
            special_requests: dto.special_requests,
            occasion: dto.occasion,
            table_id: dto.table_id,
        }
    }
}

/// A confirmed booking together with the held table.
#[derive(Debug, Clone)]
pub struct Confirmation {
    pub reservation: Reservation,
    pub table: Table,
    pub customer_name: String,
}

impl Confirmation {
    pub fn into_dto(self) -> ReservationConfirmationDto {
        ReservationConfirmationDto {
            reservation_id: format!("RES-{:06}", self.reservation.id),
            table_name: self.table.name.to_string(),
            date: self.reservation.reservation_date.format("%Y-%m-%d").to_string(),
            time: self.reservation.reservation_date.format("%H:%M").to_string(),
            party_size: self.reservation.party_size,
            customer_name: self.customer_name,
            status: self.reservation.status,
            // No mail transport is configured.
            confirmation_sent: false,
        }
    }
}
