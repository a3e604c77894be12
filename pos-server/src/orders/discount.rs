//! Discount Calculator
//!
//! Pure function converting a discount specification plus an order subtotal
//! into a bounded discount amount and new final amount. Callers persist the
//! result through the order update path.

use super::money::{to_decimal, to_f64};
use rust_decimal::prelude::*;
use shared::order::{DiscountSpec, DiscountType};

/// Result of applying a discount specification to an order total
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountOutcome {
    pub discount_amount: f64,
    pub final_amount: f64,
}

/// Apply a discount spec to an order total
///
/// - `percentage`: value clamped to `[0, 100]`, discount = total * value / 100
/// - `fixed`: value clamped to `[0, total]`
/// - `final = max(0, total - discount)`
pub fn apply(total_amount: f64, spec: &DiscountSpec) -> DiscountOutcome {
    let total = to_decimal(total_amount).max(Decimal::ZERO);

    let discount = match spec.discount_type {
        DiscountType::Percentage => {
            let pct = to_decimal(spec.value)
                .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
            total * pct / Decimal::ONE_HUNDRED
        }
        DiscountType::Fixed => to_decimal(spec.value).clamp(Decimal::ZERO, total),
    };

    let final_amount = (total - discount).max(Decimal::ZERO);

    DiscountOutcome {
        discount_amount: to_f64(discount),
        final_amount: to_f64(final_amount),
    }
}
