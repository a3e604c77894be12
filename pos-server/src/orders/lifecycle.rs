//! Order Lifecycle Manager
//!
//! Owns all order mutations except settlement: creation (order + line items
//! + table occupancy in one transaction) and partial updates with strict
//! status transition checking.

use rust_decimal::Decimal;
use serde::Deserialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{CafeTable, MenuItem, Order};
use shared::order::{
    DiscountSpec, ItemStatus, OrderItemInput, OrderStatus, PaymentMethod, TableStatus,
};
use shared::util::now_millis;
use sqlx::SqlitePool;

use super::{discount, money};
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text};

/// Order creation request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    pub table_id: i64,
    #[serde(default)]
    pub garson_id: Option<i64>,
    pub items: Vec<OrderItemInput>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial order update
///
/// `status = paid` is rejected here: an order only becomes paid through
/// payment settlement, so a paid order always has a payment record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub discount: Option<DiscountSpec>,
}

#[derive(Clone)]
pub struct OrdersManager {
    pool: SqlitePool,
}

impl OrdersManager {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create an order from a cart of line items
    ///
    /// One transaction: insert the order, insert one order_item per line
    /// (subtotal = unit_price * quantity), flip the table to occupied.
    pub async fn create_order(&self, input: CreateOrder) -> AppResult<Order> {
        if input.items.is_empty() {
            return Err(AppError::new(ErrorCode::OrderEmpty));
        }
        for item in &input.items {
            money::validate_line_item(item)?;
            validate_optional_text(&item.notes, "item notes", MAX_NOTE_LEN)?;
        }
        validate_optional_text(&input.notes, "notes", MAX_NOTE_LEN)?;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        let table: CafeTable = sqlx::query_as("SELECT * FROM tables WHERE id = ?")
            .bind(input.table_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| {
                AppError::validation(format!("Table {} does not exist", input.table_id))
            })?;

        if table.status == TableStatus::Occupied && table.current_order_id.is_some() {
            return Err(AppError::with_message(
                ErrorCode::TableOccupied,
                format!(
                    "Table {} is occupied by another active order",
                    table.table_number
                ),
            ));
        }

        if let Some(garson_id) = input.garson_id {
            let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = ?")
                .bind(garson_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| AppError::database(e.to_string()))?;
            if exists == 0 {
                return Err(AppError::validation(format!(
                    "Staff user {} does not exist",
                    garson_id
                )));
            }
        }

        // Validate menu items and compute line subtotals
        let mut total = Decimal::ZERO;
        let mut subtotals = Vec::with_capacity(input.items.len());
        for item in &input.items {
            let menu_item: Option<MenuItem> =
                sqlx::query_as("SELECT * FROM menu_items WHERE id = ?")
                    .bind(item.menu_item_id)
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(|e| AppError::database(e.to_string()))?;
            if menu_item.is_none() {
                return Err(AppError::validation(format!(
                    "Menu item {} does not exist",
                    item.menu_item_id
                )));
            }
            let subtotal = money::line_subtotal(item.unit_price, item.quantity);
            total += subtotal;
            subtotals.push(money::to_f64(subtotal));
        }
        let total_amount = money::to_f64(total);

        let now = now_millis();
        let result = sqlx::query(
            r#"
            INSERT INTO orders
                (table_id, garson_id, status, total_amount, discount_amount,
                 final_amount, notes, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(input.table_id)
        .bind(input.garson_id)
        .bind(OrderStatus::Pending)
        .bind(total_amount)
        .bind(0.0_f64)
        .bind(total_amount)
        .bind(input.notes.clone())
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
        let order_id = result.last_insert_rowid();

        for (item, subtotal) in input.items.iter().zip(subtotals.iter().copied()) {
            sqlx::query(
                r#"
                INSERT INTO order_items
                    (order_id, menu_item_id, quantity, unit_price, subtotal,
                     notes, status, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(order_id)
            .bind(item.menu_item_id)
            .bind(item.quantity)
            .bind(item.unit_price)
            .bind(subtotal)
            .bind(item.notes.clone())
            .bind(ItemStatus::Pending)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        }

        sqlx::query("UPDATE tables SET status = ?, current_order_id = ? WHERE id = ?")
            .bind(TableStatus::Occupied)
            .bind(order_id)
            .bind(input.table_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        tracing::info!(
            order_id,
            table_id = input.table_id,
            total_amount,
            items = input.items.len(),
            "Order created"
        );

        Ok(Order {
            id: order_id,
            table_id: input.table_id,
            garson_id: input.garson_id,
            status: OrderStatus::Pending,
            total_amount,
            discount_amount: 0.0,
            final_amount: total_amount,
            payment_method: None,
            notes: input.notes,
            created_at: now,
            updated_at: now,
            completed_at: None,
        })
    }

    /// Merge a partial update onto an existing order
    ///
    /// Status moves follow the strict transition table; a same-state patch is
    /// an idempotent no-op success. Discounts go through the pure calculator
    /// so `final_amount = max(0, total_amount - discount_amount)` holds after
    /// the write.
    pub async fn update_order(&self, order_id: i64, patch: OrderUpdate) -> AppResult<Order> {
        let mut order: Order = sqlx::query_as("SELECT * FROM orders WHERE id = ?")
            .bind(order_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::OrderNotFound,
                    format!("Order {} not found", order_id),
                )
            })?;

        let now = now_millis();
        let prev_status = order.status;
        let mut cancelled = false;

        if let Some(next) = patch.status
            && next != order.status
        {
            if next == OrderStatus::Paid {
                return Err(AppError::invalid_request(
                    "orders are marked paid through payment settlement",
                ));
            }
            if !order.status.can_transition_to(next) {
                return Err(AppError::with_message(
                    ErrorCode::InvalidStatusTransition,
                    format!("Cannot move order from {} to {}", order.status, next),
                ));
            }
            order.status = next;
            if next == OrderStatus::Cancelled {
                order.completed_at = Some(now);
                cancelled = true;
            }
        }

        if let Some(spec) = patch.discount {
            if order.status.is_terminal() {
                let code = if order.status == OrderStatus::Paid {
                    ErrorCode::OrderAlreadyPaid
                } else {
                    ErrorCode::OrderAlreadyCancelled
                };
                return Err(AppError::new(code));
            }
            if !spec.value.is_finite() || spec.value < 0.0 {
                return Err(AppError::validation(format!(
                    "discount value must be a non-negative number, got {}",
                    spec.value
                )));
            }
            if spec.value == 0.0 {
                return Err(AppError::validation("discount value must be greater than 0"));
            }
            let outcome = discount::apply(order.total_amount, &spec);
            order.discount_amount = outcome.discount_amount;
            order.final_amount = outcome.final_amount;
        }

        if let Some(notes) = patch.notes {
            validate_optional_text(&Some(notes.clone()), "notes", MAX_NOTE_LEN)?;
            order.notes = Some(notes);
        }
        if let Some(method) = patch.payment_method {
            order.payment_method = Some(method);
        }

        order.updated_at = now;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        // Conditional update keyed on the status we read: a patch racing a
        // settlement (or another patch) must not overwrite its transition
        let updated = sqlx::query(
            r#"
            UPDATE orders
            SET status = ?, discount_amount = ?, final_amount = ?,
                payment_method = ?, notes = ?, updated_at = ?, completed_at = ?
            WHERE id = ? AND status = ?
            "#,
        )
        .bind(order.status)
        .bind(order.discount_amount)
        .bind(order.final_amount)
        .bind(order.payment_method)
        .bind(order.notes.clone())
        .bind(order.updated_at)
        .bind(order.completed_at)
        .bind(order.id)
        .bind(prev_status)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

        if updated.rows_affected() == 0 {
            return Err(AppError::conflict("Order was modified concurrently"));
        }

        // A cancelled order releases its table in the same transaction
        if cancelled {
            sqlx::query(
                "UPDATE tables SET status = ?, current_order_id = NULL \
                 WHERE id = ? AND current_order_id = ?",
            )
            .bind(TableStatus::Available)
            .bind(order.table_id)
            .bind(order.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        tracing::info!(order_id, status = %order.status, "Order updated");

        Ok(order)
    }
}
