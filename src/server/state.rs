//! Application state shared across all request handlers.
//!
//! The state is built once at startup and cloned into each handler through Axum's state
//! extraction. Every field is cheap to clone: the database connection is a pool, the
//! admin code service and gateway client share their internals.

use sea_orm::DatabaseConnection;

use super::service::{admin::code::AdminCodeService, gateway::PaymentGateway};

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the SQLite database.
    pub db: DatabaseConnection,

    /// Holder of the one-time admin bootstrap code.
    pub admin_code_service: AdminCodeService,

    /// Card payment gateway, `None` when no secret key is configured.
    pub payment_gateway: Option<PaymentGateway>,

    /// Fraction of the subtotal charged as tax.
    pub tax_rate: f64,

    /// Fraction of the subtotal charged as service.
    pub service_charge_rate: f64,

    /// Lower-case currency code recorded on payments.
    pub currency: String,
}

impl AppState {
    /// Creates the application state from its dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `admin_code_service` - Service for the admin bootstrap code
    /// - `payment_gateway` - Card gateway client if card payments are enabled
    /// - `tax_rate` - Tax rate applied to order subtotals
    /// - `service_charge_rate` - Service charge rate applied to order subtotals
    /// - `currency` - Currency code for payments
    pub fn new(
        db: DatabaseConnection,
        admin_code_service: AdminCodeService,
        payment_gateway: Option<PaymentGateway>,
        tax_rate: f64,
        service_charge_rate: f64,
        currency: String,
    ) -> Self {
        Self {
            db,
            admin_code_service,
            payment_gateway,
            tax_rate,
            service_charge_rate,
            currency,
        }
    }
}
