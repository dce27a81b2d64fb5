use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        payment::{CreatePaymentDto, PaymentDto, PaymentInitDto},
    },
    server::{
        error::AppError,
        middleware::auth::{authorize, AuthGuard, Permission},
        model::{order::Order, user::User},
        service::{order::OrderService, payment::PaymentService},
        state::AppState,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

/// Start paying for an order.
///
/// Card payments create a payment intent at the gateway and return its client secret;
/// cash payments are recorded as pending until staff confirm them.
///
/// # Access Control
/// - The ordering customer, or `Manager`
///
/// # Arguments
/// - `id` - Order ID
/// - `payload` - `card` or `cash`
///
/// # Returns
/// - `201 Created` - The pending payment
/// - `409 Conflict` - Order cancelled or paid, or a payment is already in progress
/// - `503 Service Unavailable` - Card requested but no gateway is configured
#[utoipa::path(
    post,
    path = "/api/v1/orders/{id}/payment",
    tag = PAYMENT_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    request_body = CreatePaymentDto,
    responses(
        (status = 201, description = "Payment started", body = PaymentInitDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Order belongs to another customer", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 409, description = "Order cannot be paid", body = ErrorDto),
        (status = 502, description = "Payment gateway error", body = ErrorDto),
        (status = 503, description = "Card payments are not configured", body = ErrorDto)
    ),
)]
pub async fn start_payment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CreatePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let (_, order) = load_owned_order(&state, &session, id).await?;

    let init = payment_service(&state)
        .start(&order, payload.payment_method)
        .await?;

    Ok((StatusCode::CREATED, Json(init.into_dto())))
}

/// Get the payment for an order.
///
/// # Access Control
/// - The ordering customer, or `Manager`
#[utoipa::path(
    get,
    path = "/api/v1/orders/{id}/payment",
    tag = PAYMENT_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Payment", body = PaymentDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Order belongs to another customer", body = ErrorDto),
        (status = 404, description = "Order or payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_payment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let (_, order) = load_owned_order(&state, &session, id).await?;

    let payment = payment_service(&state).get(order.id).await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}

/// Confirm a pending payment.
///
/// Card payments are settled from the gateway's intent status. Cash payments are marked
/// paid and may only be confirmed by staff.
///
/// # Access Control
/// - The ordering customer, or `Manager`; cash additionally requires `Staff`
#[utoipa::path(
    post,
    path = "/api/v1/orders/{id}/payment/confirm",
    tag = PAYMENT_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Payment after confirmation", body = PaymentDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User may not confirm this payment", body = ErrorDto),
        (status = 404, description = "Order or payment not found", body = ErrorDto),
        (status = 409, description = "Payment is not pending", body = ErrorDto),
        (status = 502, description = "Payment gateway error", body = ErrorDto)
    ),
)]
pub async fn confirm_payment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let (user, order) = load_owned_order(&state, &session, id).await?;

    let payment = payment_service(&state).confirm(order.id, &user).await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}

/// Refund a paid payment.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/v1/orders/{id}/payment/refund",
    tag = PAYMENT_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Payment refunded", body = PaymentDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 409, description = "Payment is not paid", body = ErrorDto),
        (status = 502, description = "Payment gateway error", body = ErrorDto)
    ),
)]
pub async fn refund_payment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let payment = payment_service(&state).refund(id).await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}

/// Loads an order the logged-in user owns or manages.
async fn load_owned_order(
    state: &AppState,
    session: &Session,
    order_id: i32,
) -> Result<(User, Order), AppError> {
    let user = AuthGuard::new(&state.db, session).require(&[]).await?;

    let order = OrderService::new(&state.db, state.tax_rate, state.service_charge_rate)
        .get(order_id)
        .await?;
    authorize(&user, &[Permission::OwnerOrManager(order.customer_id)])?;

    Ok((user, order))
}

fn payment_service(state: &AppState) -> PaymentService<'_> {
    PaymentService::new(&state.db, state.payment_gateway.as_ref(), &state.currency)
}
