use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct ReservationDto {
    pub id: i32,
    pub customer_id: i32,
    pub reservation_date: DateTime<Utc>,
    pub party_size: i32,
    pub status: ReservationStatus,
    pub table_number: Option<String>,
    pub special_requests: Option<String>,
    pub occasion: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateReservationDto {
    pub reservation_date: DateTime<Utc>,
    pub party_size: i32,
    pub special_requests: Option<String>,
    pub occasion: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct UpdateReservationDto {
    pub reservation_date: Option<DateTime<Utc>>,
    pub party_size: Option<i32>,
    pub status: Option<ReservationStatus>,
    pub table_number: Option<String>,
    pub special_requests: Option<String>,
    pub occasion: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct PaginatedReservationsDto {
    pub reservations: Vec<ReservationDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct AvailabilityRequestDto {
    /// Date as `YYYY-MM-DD`.
    pub date: String,
    /// Time as `HH:MM`.
    pub time: String,
    pub party_size: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct TableDto {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub kind: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct AlternativeSlotDto {
    /// Time as `HH:MM`.
    pub time: String,
    pub available_tables: usize,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct AvailabilityResponseDto {
    pub available: bool,
    /// Best fitting table when `available` is true.
    pub table_id: Option<i32>,
    pub table_name: Option<String>,
    pub message: String,
    /// Other slots that evening with a fitting table, when `available` is false.
    pub alternatives: Vec<AlternativeSlotDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct ConfirmReservationDto {
    pub reservation_date: DateTime<Utc>,
    pub party_size: i32,
    pub special_requests: Option<String>,
    pub occasion: Option<String>,
    /// Table chosen from a previous availability check.
    pub table_id: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct ReservationConfirmationDto {
    /// Human-readable reference, `RES-` followed by the zero-padded id.
    pub reservation_id: String,
    pub table_name: String,
    pub date: String,
    pub time: String,
    pub party_size: i32,
    pub customer_name: String,
    pub status: ReservationStatus,
    pub confirmation_sent: bool,
}
