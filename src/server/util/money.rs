//! Money arithmetic.
//!
//! Amounts are stored as `f64` but every calculation runs in `Decimal` and is rounded
//! half-up to two places before being converted back.

use rust_decimal::prelude::*;

use crate::server::error::{internal::InternalError, AppError};

const DECIMAL_PLACES: u32 = 2;

/// Computed amounts for an order, each rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub tax_amount: f64,
    pub service_charge: f64,
    pub total_amount: f64,
}

/// Converts a stored amount to `Decimal`, rejecting NaN and infinities.
pub fn to_decimal(value: f64) -> Result<Decimal, AppError> {
    if !value.is_finite() {
        return Err(InternalError::InvalidAmount(value).into());
    }
    Decimal::from_f64(value).ok_or_else(|| InternalError::InvalidAmount(value).into())
}

pub fn round(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

pub fn to_f64(value: Decimal) -> f64 {
    round(value).to_f64().unwrap_or_default()
}

/// Price of one order line: `unit_price × quantity`, rounded.
pub fn line_total(unit_price: f64, quantity: i32) -> Result<Decimal, AppError> {
    Ok(round(to_decimal(unit_price)? * Decimal::from(quantity)))
}

/// Sums order lines and applies tax and service charge to the subtotal.
///
/// Each component is rounded before the total is summed, so
/// `total_amount == subtotal + tax_amount + service_charge` holds exactly.
pub fn order_totals(
    line_totals: &[Decimal],
    tax_rate: f64,
    service_charge_rate: f64,
) -> Result<OrderTotals, AppError> {
    let subtotal = round(line_totals.iter().copied().sum::<Decimal>());
    let tax = round(subtotal * to_decimal(tax_rate)?);
    let service = round(subtotal * to_decimal(service_charge_rate)?);
    let total = subtotal + tax + service;

    Ok(OrderTotals {
        subtotal: to_f64(subtotal),
        tax_amount: to_f64(tax),
        service_charge: to_f64(service),
        total_amount: to_f64(total),
    })
}

/// Adds amounts without accumulating binary floating point error.
pub fn sum(values: impl IntoIterator<Item = f64>) -> Result<f64, AppError> {
    let mut total = Decimal::ZERO;
    for value in values {
        total += to_decimal(value)?;
    }
    Ok(to_f64(total))
}

/// Converts an amount to integer minor units (pesewas, cents) for the payment gateway.
pub fn to_minor_units(amount: f64) -> Result<i64, AppError> {
    let minor = round(to_decimal(amount)?) * Decimal::from(100);
    minor
        .to_i64()
        .ok_or_else(|| InternalError::InvalidAmount(amount).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_totals_with_default_rates() {
        let lines = vec![line_total(12.99, 3).unwrap()];
        let totals = order_totals(&lines, 0.08, 0.10).unwrap();

        assert_eq!(totals.subtotal, 38.97);
        assert_eq!(totals.tax_amount, 3.12);
        assert_eq!(totals.service_charge, 3.90);
        assert_eq!(totals.total_amount, 45.99);
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(to_f64(Decimal::new(1005, 3)), 1.01);
        assert_eq!(to_f64(Decimal::new(1004, 3)), 1.0);
    }

    #[test]
    fn total_is_sum_of_components() {
        let lines = vec![line_total(0.1, 7).unwrap(), line_total(3.33, 1).unwrap()];
        let totals = order_totals(&lines, 0.075, 0.125).unwrap();

        let recomposed = sum([totals.subtotal, totals.tax_amount, totals.service_charge]).unwrap();
        assert_eq!(recomposed, totals.total_amount);
        assert_eq!(totals.subtotal, 4.03);
    }

    #[test]
    fn rejects_non_finite_amounts() {
        assert!(to_decimal(f64::NAN).is_err());
        assert!(to_decimal(f64::INFINITY).is_err());
    }

    #[test]
    fn converts_to_minor_units() {
        assert_eq!(to_minor_units(45.99).unwrap(), 4599);
        assert_eq!(to_minor_units(10.0).unwrap(), 1000);
    }
}
