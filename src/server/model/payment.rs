//! Payment domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        order::PaymentStatus,
        payment::{PaymentDto, PaymentMethod},
    },
    server::{error::AppError, util::parse::parse_stored},
};

/// The single payment attached to an order.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub order_id: i32,
    /// Gateway payment intent id, card payments only.
    pub gateway_reference: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub status: PaymentStatus,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Payment {
    pub fn from_entity(entity: entity::payment::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            order_id: entity.order_id,
            gateway_reference: entity.gateway_reference,
            amount: entity.amount,
            currency: entity.currency,
            status: parse_stored("status", entity.status)?,
            payment_method: parse_stored("payment_method", entity.payment_method)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            id: self.id,
            order_id: self.order_id,
            gateway_reference: self.gateway_reference,
            amount: self.amount,
            currency: self.currency,
            status: self.status,
            payment_method: self.payment_method,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewPayment {
    pub order_id: i32,
    pub gateway_reference: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub payment_method: PaymentMethod,
}

/// A started payment plus the secret the browser needs to finish a card payment.
#[derive(Debug, Clone)]
pub struct PaymentInit {
    pub payment: Payment,
    pub client_secret: Option<String>,
}

impl PaymentInit {
    pub fn into_dto(self) -> crate::model::payment::PaymentInitDto {
        crate::model::payment::PaymentInitDto {
            payment: self.payment.into_dto(),
            client_secret: self.client_secret,
        }
    }
}
