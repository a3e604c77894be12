//! Payment Repository
//!
//! Read-only access to the append-only payments table. Settlement writes go
//! through [`crate::orders::SettlementProcessor`].

use super::{BaseRepository, RepoResult};
use shared::models::Payment;
use sqlx::SqlitePool;

/// Revenue split by tender type (net of change handed back)
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct RevenueSplit {
    pub cash_revenue: f64,
    pub card_revenue: f64,
}

#[derive(Clone)]
pub struct PaymentRepository {
    base: BaseRepository,
}

impl PaymentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// Payments recorded against an order, oldest first
    pub async fn list_by_order(&self, order_id: i64) -> RepoResult<Vec<Payment>> {
        let payments = sqlx::query_as::<_, Payment>(
            "SELECT * FROM payments WHERE order_id = ? ORDER BY payment_date, id",
        )
        .bind(order_id)
        .fetch_all(self.base.pool())
        .await?;
        Ok(payments)
    }

    /// Cash/card revenue split across all payments
    pub async fn revenue_split(&self) -> RepoResult<RevenueSplit> {
        let split = sqlx::query_as::<_, RevenueSplit>(
            r#"
            SELECT
                COALESCE(SUM(cash_amount - change_given), 0.0) AS cash_revenue,
                COALESCE(SUM(card_amount), 0.0) AS card_revenue
            FROM payments
            "#,
        )
        .fetch_one(self.base.pool())
        .await?;
        Ok(split)
    }
}
