//! Order Models

use crate::order::{ItemStatus, OrderStatus, PaymentMethod};
use serde::{Deserialize, Serialize};

/// A customer's session at a table
///
/// Invariant held after every mutation:
/// `final_amount = max(0, total_amount - discount_amount)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub table_id: i64,
    pub garson_id: Option<i64>,
    pub status: OrderStatus,
    pub total_amount: f64,
    pub discount_amount: f64,
    pub final_amount: f64,
    pub payment_method: Option<PaymentMethod>,
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
    /// Set only on reaching a terminal state (paid / cancelled)
    pub completed_at: Option<i64>,
}

/// Order as served by the list endpoint, with table number and waiter name
/// joined in
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderSummary {
    pub id: i64,
    pub table_id: i64,
    pub table_number: Option<i64>,
    pub garson_id: Option<i64>,
    pub garson_name: Option<String>,
    pub status: OrderStatus,
    pub total_amount: f64,
    pub discount_amount: f64,
    pub final_amount: f64,
    pub payment_method: Option<PaymentMethod>,
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
    pub completed_at: Option<i64>,
}

/// One menu selection within an order, price frozen at order time
///
/// Invariant at creation: `subtotal = unit_price * quantity`, and the sum of
/// all subtotals equals the order's `total_amount`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub menu_item_id: i64,
    pub menu_item_name_en: Option<String>,
    pub menu_item_name_ku: Option<String>,
    pub quantity: i64,
    pub unit_price: f64,
    pub subtotal: f64,
    pub notes: Option<String>,
    pub status: ItemStatus,
    pub created_at: i64,
}
