use crate::{
    model::{order::PaymentStatus, payment::PaymentMethod},
    server::{
        data::{order::OrderRepository, payment::PaymentRepository},
        error::AppError,
        model::payment::NewPayment,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod set_status;
