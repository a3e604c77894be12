//! Café Table Model

use crate::order::TableStatus;
use serde::{Deserialize, Serialize};

/// Physical café table (桌台)
///
/// Invariant: `status == occupied` iff `current_order_id` is set. The
/// reference to the current order is weak: it is cleared on settlement and
/// never cascades deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CafeTable {
    pub id: i64,
    pub table_number: i64,
    pub qr_code: String,
    pub capacity: i64,
    pub status: TableStatus,
    pub current_order_id: Option<i64>,
}
