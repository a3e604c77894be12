//! Money calculation utilities using rust_decimal for precision
//!
//! All monetary arithmetic is done using `Decimal` internally, then converted
//! to `f64` for storage/serialization, rounded to 2 decimal places.

use rust_decimal::prelude::*;
use shared::error::{AppError, AppResult};
use shared::order::OrderItemInput;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed price per unit
const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per line item
const MAX_QUANTITY: i64 = 9999;
/// Maximum allowed tendered amount
const MAX_TENDER_AMOUNT: f64 = 1_000_000.0;

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field_name: &str) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::validation(format!(
            "{} must be a finite number, got {}",
            field_name, value
        )));
    }
    Ok(())
}

/// Validate a line item before order creation
pub fn validate_line_item(item: &OrderItemInput) -> AppResult<()> {
    require_finite(item.unit_price, "unitPrice")?;
    if item.unit_price < 0.0 {
        return Err(AppError::validation(format!(
            "unitPrice must be non-negative, got {}",
            item.unit_price
        )));
    }
    if item.unit_price > MAX_PRICE {
        return Err(AppError::validation(format!(
            "unitPrice exceeds maximum allowed ({}), got {}",
            MAX_PRICE, item.unit_price
        )));
    }

    if item.quantity < 1 {
        return Err(AppError::validation(format!(
            "quantity must be at least 1, got {}",
            item.quantity
        )));
    }
    if item.quantity > MAX_QUANTITY {
        return Err(AppError::validation(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, item.quantity
        )));
    }

    Ok(())
}

/// Validate tendered cash/card components before settlement
pub fn validate_tender(cash: f64, card: f64) -> AppResult<()> {
    for (value, field) in [(cash, "cashAmount"), (card, "cardAmount")] {
        require_finite(value, field)?;
        if value < 0.0 {
            return Err(AppError::validation(format!(
                "{} must be non-negative, got {}",
                field, value
            )));
        }
        if value > MAX_TENDER_AMOUNT {
            return Err(AppError::validation(format!(
                "{} exceeds maximum allowed ({}), got {}",
                field, MAX_TENDER_AMOUNT, value
            )));
        }
    }
    Ok(())
}

/// Convert f64 to Decimal for calculation
///
/// Input values should be pre-validated via `require_finite()` at the
/// boundary. If NaN/Infinity somehow reaches here, logs an error and returns
/// ZERO to avoid silent data corruption in financial calculations.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        // SAFETY: Decimal rounded to 2dp with max input ≤ 1_000_000 (validated at boundary)
        // is always within f64 representable range
        .expect("Decimal rounded to 2dp is always representable as f64")
}

/// Line subtotal: unit_price * quantity, rounded to 2 decimal places
pub fn line_subtotal(unit_price: f64, quantity: i64) -> Decimal {
    (to_decimal(unit_price) * Decimal::from(quantity))
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Check if payment is sufficient (with small tolerance for edge cases)
///
/// Returns true if tendered >= required - 0.01
pub fn is_payment_sufficient(tendered: Decimal, required: Decimal) -> bool {
    tendered >= required - MONEY_TOLERANCE
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}
