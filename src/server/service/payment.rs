//! Order payments.
//!
//! Card payments go through the external gateway: starting one creates a payment intent
//! whose client secret the browser uses, and confirming re-reads the intent's status.
//! Cash payments are recorded as pending and confirmed by staff at the till.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        order::{OrderStatus, PaymentStatus},
        payment::PaymentMethod,
    },
    server::{
        data::payment::PaymentRepository,
        error::{auth::AuthError, internal::InternalError, payment::PaymentError, AppError},
        model::{
            order::Order,
            payment::{NewPayment, Payment, PaymentInit},
            user::User,
        },
        service::gateway::PaymentGateway,
        util::money,
    },
};

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
    gateway: Option<&'a PaymentGateway>,
    currency: &'a str,
}

impl<'a> PaymentService<'a> {
    /// Creates a new PaymentService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `gateway` - Card gateway client, `None` when card payments are disabled
    /// - `currency` - Currency code recorded on new payments
    pub fn new(
        db: &'a DatabaseConnection,
        gateway: Option<&'a PaymentGateway>,
        currency: &'a str,
    ) -> Self {
        Self {
            db,
            gateway,
            currency,
        }
    }

    /// Starts paying for an order.
    ///
    /// A previous failed attempt is replaced; any other existing payment blocks a new one.
    ///
    /// # Returns
    /// - `Ok(PaymentInit)` - The pending payment, plus the intent's client secret for cards
    /// - `Err(AppError::Conflict)` - Order cancelled or paid, or a payment is in progress
    /// - `Err(AppError::PaymentErr(GatewayNotConfigured))` - Card requested without gateway
    /// - `Err(AppError::PaymentErr)` - Gateway failure
    pub async fn start(
        &self,
        order: &Order,
        payment_method: PaymentMethod,
    ) -> Result<PaymentInit, AppError> {
        if order.status == OrderStatus::Cancelled {
            return Err(AppError::Conflict(
                "Cannot pay for a cancelled order".to_string(),
            ));
        }
        if order.payment_status == PaymentStatus::Paid {
            return Err(AppError::Conflict("Order is already paid".to_string()));
        }

        let repo = PaymentRepository::new(self.db);
        let existing = repo.find_by_order_id(order.id).await?;
        if let Some(existing) = &existing {
            if existing.status != PaymentStatus::Failed {
                return Err(AppError::Conflict(
                    "A payment already exists for this order".to_string(),
                ));
            }
        }

        let gateway = match payment_method {
            PaymentMethod::Card => Some(self.gateway()?),
            PaymentMethod::Cash => None,
        };

        let (gateway_reference, client_secret) = match gateway {
            Some(gateway) => {
                let intent = gateway
                    .create_intent(
                        money::to_minor_units(order.total_amount)?,
                        self.currency,
                        &order.order_number,
                    )
                    .await?;
                (Some(intent.id), intent.client_secret)
            }
            None => (None, None),
        };

        let payment = repo
            .create(
                NewPayment {
                    order_id: order.id,
                    gateway_reference,
                    amount: order.total_amount,
                    currency: self.currency.to_string(),
                    payment_method,
                },
                existing.map(|existing| existing.id),
            )
            .await?;

        tracing::info!(
            "Started {} payment {} for order {}",
            payment.payment_method,
            payment.id,
            order.order_number
        );

        Ok(PaymentInit {
            payment,
            client_secret,
        })
    }

    /// Gets the payment attached to an order.
    pub async fn get(&self, order_id: i32) -> Result<Payment, AppError> {
        PaymentRepository::new(self.db)
            .find_by_order_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))
    }

    /// Settles a pending payment.
    ///
    /// Card payments take their outcome from the gateway intent: `succeeded` becomes paid,
    /// `canceled` or `requires_payment_method` becomes failed, anything else stays
    /// pending. Cash payments can only be confirmed by staff and become paid.
    ///
    /// # Returns
    /// - `Ok(Payment)` - Payment with its settled (or still pending) status
    /// - `Err(AppError::Conflict)` - Payment is not pending
    /// - `Err(AppError::AuthErr(AccessDenied))` - Non-staff confirming cash
    pub async fn confirm(&self, order_id: i32, confirmer: &User) -> Result<Payment, AppError> {
        let payment = self.get(order_id).await?;

        if payment.status != PaymentStatus::Pending {
            return Err(AppError::Conflict(format!(
                "Payment is already {}",
                payment.status
            )));
        }

        let status = match payment.payment_method {
            PaymentMethod::Cash => {
                if !confirmer.is_staff() {
                    return Err(AuthError::AccessDenied(
                        confirmer.id,
                        "Only staff can confirm cash payments".to_string(),
                    )
                    .into());
                }
                PaymentStatus::Paid
            }
            PaymentMethod::Card => {
                let intent = self
                    .gateway()?
                    .retrieve_intent(Self::reference(&payment)?)
                    .await?;
                match intent.status.as_str() {
                    "succeeded" => PaymentStatus::Paid,
                    "canceled" | "requires_payment_method" => PaymentStatus::Failed,
                    _ => return Ok(payment),
                }
            }
        };

        let payment = self.set_status(payment.id, status).await?;

        tracing::info!(
            "Payment {} for order {} is now {}",
            payment.id,
            order_id,
            payment.status
        );

        Ok(payment)
    }

    /// Refunds a paid payment, at the gateway for card payments.
    ///
    /// # Returns
    /// - `Ok(Payment)` - Payment marked refunded
    /// - `Err(AppError::Conflict)` - Payment is not paid
    pub async fn refund(&self, order_id: i32) -> Result<Payment, AppError> {
        let payment = self.get(order_id).await?;

        if payment.status != PaymentStatus::Paid {
            return Err(AppError::Conflict(
                "Only paid payments can be refunded".to_string(),
            ));
        }

        if payment.payment_method == PaymentMethod::Card {
            let refund = self
                .gateway()?
                .refund(Self::reference(&payment)?)
                .await?;
            tracing::info!("Gateway refund {} issued for order {}", refund.id, order_id);
        }

        self.set_status(payment.id, PaymentStatus::Refunded).await
    }

    async fn set_status(&self, id: i32, status: PaymentStatus) -> Result<Payment, AppError> {
        PaymentRepository::new(self.db)
            .set_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))
    }

    fn gateway(&self) -> Result<&'a PaymentGateway, AppError> {
        self.gateway
            .ok_or_else(|| PaymentError::GatewayNotConfigured.into())
    }

    fn reference(payment: &Payment) -> Result<&str, AppError> {
        payment.gateway_reference.as_deref().ok_or_else(|| {
            InternalError::MissingGatewayReference(payment.id).into()
        })
    }
}
