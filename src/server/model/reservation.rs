//! Reservation domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::reservation::{
        CreateReservationDto, PaginatedReservationsDto, ReservationDto, ReservationStatus,
        UpdateReservationDto,
    },
    server::{error::AppError, model::Page, util::parse::parse_stored},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub customer_id: i32,
    pub reservation_date: DateTime<Utc>,
    pub party_size: i32,
    pub status: ReservationStatus,
    /// Name of the held table, e.g. `"Table 3"`.
    pub table_number: Option<String>,
    pub special_requests: Option<String>,
    pub occasion: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Reservation {
    pub fn from_entity(entity: entity::reservation::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            customer_id: entity.customer_id,
            reservation_date: entity.reservation_date,
            party_size: entity.party_size,
            status: parse_stored("status", entity.status)?,
            table_number: entity.table_number,
            special_requests: entity.special_requests,
            occasion: entity.occasion,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            customer_id: self.customer_id,
            reservation_date: self.reservation_date,
            party_size: self.party_size,
            status: self.status,
            table_number: self.table_number,
            special_requests: self.special_requests,
            occasion: self.occasion,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Page<Reservation> {
    pub fn into_dto(self) -> PaginatedReservationsDto {
        let total_pages = self.total_pages();
        PaginatedReservationsDto {
            reservations: self.items.into_iter().map(Reservation::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub customer_id: i32,
    pub reservation_date: DateTime<Utc>,
    pub party_size: i32,
    pub status: ReservationStatus,
    pub table_number: Option<String>,
    pub special_requests: Option<String>,
    pub occasion: Option<String>,
}

impl CreateReservationParams {
    /// Builds a pending reservation request without a table.
    pub fn from_dto(customer_id: i32, dto: CreateReservationDto) -> Self {
        Self {
            customer_id,
            reservation_date: dto.reservation_date,
            party_size: dto.party_size,
            status: ReservationStatus::Pending,
            table_number: None,
            special_requests: dto.special_requests,
            occasion: dto.occasion,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateReservationParams {
    pub reservation_date: Option<DateTime<Utc>>,
    pub party_size: Option<i32>,
    pub status: Option<ReservationStatus>,
    pub table_number: Option<String>,
    pub special_requests: Option<String>,
    pub occasion: Option<String>,
}

impl From<UpdateReservationDto> for UpdateReservationParams {
    fn from(dto: UpdateReservationDto) -> Self {
        Self {
            reservation_date: dto.reservation_date,
            party_size: dto.party_size,
            status: dto.status,
            table_number: dto.table_number,
            special_requests: dto.special_requests,
            occasion: dto.occasion,
        }
    }
}
