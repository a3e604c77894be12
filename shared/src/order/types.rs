//! Order domain types
//!
//! Status enums, payment methods and discount specifications shared between
//! the server and clients. All enums serialize as lowercase strings, which
//! is also how they are stored in SQLite.

use serde::{Deserialize, Serialize};

/// Order lifecycle status
///
/// Strict transition table:
///
/// ```text
/// pending -> preparing -> ready -> served -> paid   [terminal]
/// pending|preparing|ready|served -> cancelled       [terminal]
/// ```
///
/// No transition is defined out of `paid` or `cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Served,
    Paid,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Served => "served",
            Self::Paid => "paid",
            Self::Cancelled => "cancelled",
        }
    }

    /// Terminal statuses accept no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Paid | Self::Cancelled)
    }

    /// Whether moving from `self` to `next` is a legal transition.
    ///
    /// Same-state moves are not transitions; callers treat them as
    /// idempotent no-ops.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        match (self, next) {
            (Self::Pending, Self::Preparing)
            | (Self::Preparing, Self::Ready)
            | (Self::Ready, Self::Served)
            | (Self::Served, Self::Paid) => true,
            (from, Self::Cancelled) if !from.is_terminal() => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-line-item preparation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum ItemStatus {
    Pending,
    Preparing,
    Ready,
    Served,
}

/// Physical table occupancy status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum TableStatus {
    Available,
    Occupied,
    Reserved,
}

/// Payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum PaymentMethod {
    Cash,
    Card,
    Mixed,
}

/// Discount type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Percentage,
    Fixed,
}

/// Discount specification as submitted by the cashier
///
/// `percentage` values are interpreted in `[0, 100]`, `fixed` values as an
/// absolute amount; both are clamped by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountSpec {
    #[serde(rename = "type")]
    pub discount_type: DiscountType,
    pub value: f64,
}

/// One line item of an order-creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
    pub menu_item_id: i64,
    pub quantity: i64,
    /// Price per unit, frozen at order time
    pub unit_price: f64,
    #[serde(default)]
    pub notes: Option<String>,
}
