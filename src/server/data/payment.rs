//! Payment data repository.
//!
//! An order has at most one payment row. Payment status changes are mirrored onto the
//! order's `payment_status` inside the same transaction.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    TransactionTrait,
};

use crate::{
    model::order::PaymentStatus,
    server::{
        error::AppError,
        model::payment::{NewPayment, Payment},
    },
};

pub struct PaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_order_id(&self, order_id: i32) -> Result<Option<Payment>, AppError> {
        let entity = entity::prelude::Payment::find()
            .filter(entity::payment::Column::OrderId.eq(order_id))
            .one(self.db)
            .await?;

        entity.map(Payment::from_entity).transpose()
    }

    /// Inserts a pending payment for an order and marks the order's payment as pending.
    ///
    /// `replacing` names a previous payment row for the same order, removed in the same
    /// transaction.
    pub async fn create(
        &self,
        new_payment: NewPayment,
        replacing: Option<i32>,
    ) -> Result<Payment, AppError> {
        let txn = self.db.begin().await?;

        if let Some(previous) = replacing {
            entity::prelude::Payment::delete_by_id(previous)
                .exec(&txn)
                .await?;
        }

        let order_id = new_payment.order_id;
        let entity = entity::payment::ActiveModel {
            order_id: ActiveValue::Set(order_id),
            gateway_reference: ActiveValue::Set(new_payment.gateway_reference),
            amount: ActiveValue::Set(new_payment.amount),
            currency: ActiveValue::Set(new_payment.currency),
            status: ActiveValue::Set(PaymentStatus::Pending.as_str().to_string()),
            payment_method: ActiveValue::Set(new_payment.payment_method.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        if let Some(order) = entity::prelude::Order::find_by_id(order_id).one(&txn).await? {
            let mut order: entity::order::ActiveModel = order.into();
            order.payment_status = ActiveValue::Set(PaymentStatus::Pending.as_str().to_string());
            order.updated_at = ActiveValue::Set(Some(Utc::now()));
            order.update(&txn).await?;
        }

        txn.commit().await?;

        Payment::from_entity(entity)
    }

    /// Sets the payment status and mirrors it onto the owning order.
    ///
    /// # Returns
    /// - `Ok(Some(Payment))` - Updated payment
    /// - `Ok(None)` - No payment with that id
    pub async fn set_status(
        &self,
        id: i32,
        status: PaymentStatus,
    ) -> Result<Option<Payment>, AppError> {
        let txn = self.db.begin().await?;

        let Some(entity) = entity::prelude::Payment::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };
        let order_id = entity.order_id;

        let mut active: entity::payment::ActiveModel = entity.into();
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.updated_at = ActiveValue::Set(Some(Utc::now()));
        let entity = active.update(&txn).await?;

        if let Some(order) = entity::prelude::Order::find_by_id(order_id).one(&txn).await? {
            let mut order: entity::order::ActiveModel = order.into();
            order.payment_status = ActiveValue::Set(status.as_str().to_string());
            order.updated_at = ActiveValue::Set(Some(Utc::now()));
            order.update(&txn).await?;
        }

        txn.commit().await?;

        Ok(Some(Payment::from_entity(entity)?))
    }
}
