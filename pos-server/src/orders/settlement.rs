//! Payment Settlement Processor
//!
//! Validates the tendered amount against an order's final amount, records a
//! payment, marks the order paid and frees the table, all as one
//! transaction. A conditional update on the order status serializes
//! concurrent settlement attempts: at most one succeeds.

use rust_decimal::prelude::*;
use serde::Deserialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Order, Payment};
use shared::order::{OrderStatus, PaymentMethod, TableStatus};
use shared::util::now_millis;
use sqlx::SqlitePool;

use super::money;

/// Payment settlement request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPayment {
    pub order_id: i64,
    pub cashier_id: i64,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub cash_amount: f64,
    #[serde(default)]
    pub card_amount: f64,
}

#[derive(Clone)]
pub struct SettlementProcessor {
    pool: SqlitePool,
}

impl SettlementProcessor {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Settle an order
    ///
    /// Tendered amount per method: `cash` uses the cash component, `card` is
    /// assumed exact (the order's final amount), `mixed` sums both
    /// components. Change is only ever given from cash.
    pub async fn process_payment(&self, input: ProcessPayment) -> AppResult<Payment> {
        money::validate_tender(input.cash_amount, input.card_amount)?;

        let cashier_exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = ?")
            .bind(input.cashier_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        if cashier_exists == 0 {
            return Err(AppError::validation(format!(
                "Cashier {} does not exist",
                input.cashier_id
            )));
        }

        let order: Order = sqlx::query_as("SELECT * FROM orders WHERE id = ?")
            .bind(input.order_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::OrderNotFound,
                    format!("Order {} not found", input.order_id),
                )
            })?;

        match order.status {
            OrderStatus::Paid => return Err(AppError::new(ErrorCode::OrderAlreadyPaid)),
            OrderStatus::Cancelled => {
                return Err(AppError::new(ErrorCode::OrderAlreadyCancelled));
            }
            _ => {}
        }

        let final_due = money::to_decimal(order.final_amount);
        let (tendered, cash_amount, card_amount) = match input.payment_method {
            PaymentMethod::Cash => (money::to_decimal(input.cash_amount), input.cash_amount, 0.0),
            // Card is charged exactly; any submitted components are ignored
            PaymentMethod::Card => (final_due, 0.0, order.final_amount),
            PaymentMethod::Mixed => (
                money::to_decimal(input.cash_amount) + money::to_decimal(input.card_amount),
                input.cash_amount,
                input.card_amount,
            ),
        };

        if !money::is_payment_sufficient(tendered, final_due) {
            return Err(AppError::with_message(
                ErrorCode::PaymentInsufficientAmount,
                format!(
                    "Tendered {:.2} is less than the amount due {:.2}",
                    money::to_f64(tendered),
                    order.final_amount
                ),
            ));
        }

        let change_given = money::to_f64((tendered - final_due).max(Decimal::ZERO));
        let now = now_millis();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        // Compare-and-set on the status: when two cashiers settle the same
        // order, the guard lets exactly one writer through
        let updated = sqlx::query(
            r#"
            UPDATE orders
            SET status = ?, payment_method = ?, completed_at = ?, updated_at = ?
            WHERE id = ? AND status NOT IN ('paid', 'cancelled')
            "#,
        )
        .bind(OrderStatus::Paid)
        .bind(input.payment_method)
        .bind(now)
        .bind(now)
        .bind(order.id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

        if updated.rows_affected() == 0 {
            // Lost the race to another settlement (or a cancel)
            return Err(AppError::new(ErrorCode::OrderAlreadyPaid));
        }

        let result = sqlx::query(
            r#"
            INSERT INTO payments
                (order_id, cashier_id, amount_paid, payment_method,
                 cash_amount, card_amount, change_given, payment_date, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(order.id)
        .bind(input.cashier_id)
        .bind(order.final_amount)
        .bind(input.payment_method)
        .bind(cash_amount)
        .bind(card_amount)
        .bind(change_given)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
        let payment_id = result.last_insert_rowid();

        // Free the table; the weak back-reference is cleared only while it
        // still points at this order
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

        tx.commit()
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        tracing::info!(
            order_id = order.id,
            payment_id,
            method = ?input.payment_method,
            amount = order.final_amount,
            change_given,
            "Order settled"
        );

        Ok(Payment {
            id: payment_id,
            order_id: order.id,
            cashier_id: input.cashier_id,
            amount_paid: order.final_amount,
            payment_method: input.payment_method,
            cash_amount,
            card_amount,
            change_given,
            payment_date: now,
            created_at: now,
        })
    }
}
