//! Reservation data repository.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::reservation::ReservationStatus,
    server::{
        error::AppError,
        model::reservation::{CreateReservationParams, Reservation, UpdateReservationParams},
    },
};

/// Statuses that keep a table held.
pub const HOLDING_STATUSES: [ReservationStatus; 2] =
    [ReservationStatus::Pending, ReservationStatus::Confirmed];

pub struct ReservationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateReservationParams) -> Result<Reservation, AppError> {
        let entity = entity::reservation::ActiveModel {
            customer_id: ActiveValue::Set(params.customer_id),
            reservation_date: ActiveValue::Set(params.reservation_date),
            party_size: ActiveValue::Set(params.party_size),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            table_number: ActiveValue::Set(params.table_number),
            special_requests: ActiveValue::Set(params.special_requests),
            occasion: ActiveValue::Set(params.occasion),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Reservation::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Reservation>, AppError> {
        let entity = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?;

        entity.map(Reservation::from_entity).transpose()
    }

    /// Lists reservations by reservation date, latest first.
    ///
    /// # Arguments
    /// - `customer_id` - Restrict to one customer, or `None` for every reservation
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of reservations per page
    pub async fn get_paginated(
        &self,
        customer_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Reservation>, u64), AppError> {
        let mut query = entity::prelude::Reservation::find();
        if let Some(customer_id) = customer_id {
            query = query.filter(entity::reservation::Column::CustomerId.eq(customer_id));
        }

        let paginator = query
            .order_by_desc(entity::reservation::Column::ReservationDate)
            .order_by_desc(entity::reservation::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let reservations = entities
            .into_iter()
            .map(Reservation::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((reservations, total))
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - Updated reservation
    /// - `Ok(None)` - No reservation with that id
    pub async fn update(
        &self,
        id: i32,
        params: UpdateReservationParams,
    ) -> Result<Option<Reservation>, AppError> {
        let Some(entity) = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::reservation::ActiveModel = entity.into();
        if let Some(reservation_date) = params.reservation_date {
            active.reservation_date = ActiveValue::Set(reservation_date);
        }
        if let Some(party_size) = params.party_size {
            active.party_size = ActiveValue::Set(party_size);
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(table_number) = params.table_number {
            active.table_number = ActiveValue::Set(Some(table_number));
        }
        if let Some(special_requests) = params.special_requests {
            active.special_requests = ActiveValue::Set(Some(special_requests));
        }
        if let Some(occasion) = params.occasion {
            active.occasion = ActiveValue::Set(Some(occasion));
        }
        active.updated_at = ActiveValue::Set(Some(Utc::now()));

        let entity = active.update(self.db).await?;

        Ok(Some(Reservation::from_entity(entity)?))
    }

    /// The most recently booked reservations, newest booking first.
    pub async fn recent(&self, limit: u64) -> Result<Vec<Reservation>, AppError> {
        let entities = entity::prelude::Reservation::find()
            .order_by_desc(entity::reservation::Column::CreatedAt)
            .order_by_desc(entity::reservation::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        entities.into_iter().map(Reservation::from_entity).collect()
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Reservation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Table names held by pending or confirmed reservations in the window `[start, end)`.
    ///
    /// # Returns
    /// - `Ok(Vec<(slot, table_name)>)` - One entry per holding reservation with a table
    pub async fn held_tables_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<(DateTime<Utc>, String)>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::ReservationDate.gte(start))
            .filter(entity::reservation::Column::ReservationDate.lt(end))
            .filter(
                entity::reservation::Column::Status
                    .is_in(HOLDING_STATUSES.iter().map(|status| status.as_str())),
            )
            .filter(entity::reservation::Column::TableNumber.is_not_null())
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .filter_map(|entity| {
                entity
                    .table_number
                    .map(|table| (entity.reservation_date, table))
            })
            .collect())
    }

    /// Whether a pending or confirmed reservation other than `exclude_id` holds `table` at
    /// the minute starting at `slot`.
    pub async fn is_table_held(
        &self,
        table: &str,
        slot: DateTime<Utc>,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::ReservationDate.gte(slot))
            .filter(entity::reservation::Column::ReservationDate.lt(slot + Duration::minutes(1)))
            .filter(
                entity::reservation::Column::Status
                    .is_in(HOLDING_STATUSES.iter().map(|status| status.as_str())),
            )
            .filter(entity::reservation::Column::TableNumber.eq(table));

        if let Some(id) = exclude_id {
            query = query.filter(entity::reservation::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }
}
