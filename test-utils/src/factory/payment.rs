//! Payment factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a payment row for an order.
///
/// # Arguments
/// - `order` - Order being paid; its total becomes the payment amount
/// - `method` - `card` or `cash`
/// - `status` - `pending`, `paid`, `failed` or `refunded`
/// - `gateway_reference` - Payment intent id for card payments
pub async fn create_payment(
    db: &DatabaseConnection,
    order: &entity::order::Model,
    method: &str,
    status: &str,
    gateway_reference: Option<&str>,
) -> Result<entity::payment::Model, DbErr> {
    entity::payment::ActiveModel {
        id: ActiveValue::NotSet,
        order_id: ActiveValue::Set(order.id),
        gateway_reference: ActiveValue::Set(gateway_reference.map(str::to_string)),
        amount: ActiveValue::Set(order.total_amount),
        currency: ActiveValue::Set("ghs".to_string()),
        status: ActiveValue::Set(status.to_string()),
        payment_method: ActiveValue::Set(method.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        updated_at: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
