//! Payment Model

use crate::order::PaymentMethod;
use serde::{Deserialize, Serialize};

/// Settlement record against exactly one order (append-only)
///
/// `cash_amount + card_amount` covered the order's final amount at the time
/// the record was written; `change_given = max(0, tendered - final_amount)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Payment {
    pub id: i64,
    pub order_id: i64,
    pub cashier_id: i64,
    /// Amount applied to the order (its final amount)
    pub amount_paid: f64,
    pub payment_method: PaymentMethod,
    pub cash_amount: f64,
    pub card_amount: f64,
    pub change_given: f64,
    pub payment_date: i64,
    pub created_at: i64,
}
