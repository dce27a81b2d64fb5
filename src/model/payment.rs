use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::order::PaymentStatus;

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Cash,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Cash => "cash",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(Self::Card),
            "cash" => Ok(Self::Cash),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct PaymentDto {
    pub id: i32,
    pub order_id: i32,
    /// Gateway payment intent id for card payments.
    pub gateway_reference: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub status: PaymentStatus,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreatePaymentDto {
    pub payment_method: PaymentMethod,
}

/// Result of starting a payment.
///
/// `client_secret` is only present for card payments and is handed to the browser to
/// complete the payment with the gateway.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct PaymentInitDto {
    pub payment: PaymentDto,
    pub client_secret: Option<String>,
}
