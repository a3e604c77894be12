//! Order Repository
//!
//! Read-only access to orders. All order mutations go through
//! [`crate::orders::OrdersManager`] and [`crate::orders::SettlementProcessor`]
//! so that every multi-record write runs inside one transaction.

use super::{BaseRepository, RepoResult};
use shared::models::{Order, OrderItem, OrderSummary};
use shared::order::OrderStatus;
use sqlx::SqlitePool;

/// Aggregates over paid orders for the dashboard
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct PaidOrderStats {
    pub paid_orders: i64,
    pub total_revenue: f64,
    pub total_discount: f64,
}

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// List orders newest first, optionally filtered by status and waiter,
    /// with table number and waiter name joined in
    pub async fn find_all(
        &self,
        status: Option<OrderStatus>,
        garson_id: Option<i64>,
    ) -> RepoResult<Vec<OrderSummary>> {
        let orders = sqlx::query_as::<_, OrderSummary>(
            r#"
            SELECT
                o.id, o.table_id, t.table_number,
                o.garson_id, u.full_name AS garson_name,
                o.status, o.total_amount, o.discount_amount, o.final_amount,
                o.payment_method, o.notes,
                o.created_at, o.updated_at, o.completed_at
            FROM orders o
            LEFT JOIN tables t ON t.id = o.table_id
            LEFT JOIN users u ON u.id = o.garson_id
            WHERE (?1 IS NULL OR o.status = ?1)
              AND (?2 IS NULL OR o.garson_id = ?2)
            ORDER BY o.created_at DESC, o.id DESC
            "#,
        )
        .bind(status)
        .bind(garson_id)
        .fetch_all(self.base.pool())
        .await?;
        Ok(orders)
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = ?")
            .bind(id)
            .fetch_optional(self.base.pool())
            .await?;
        Ok(order)
    }

    /// Find line items of an order with menu item names joined in
    pub async fn find_items(&self, order_id: i64) -> RepoResult<Vec<OrderItem>> {
        let items = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT
                i.id, i.order_id, i.menu_item_id,
                m.name_en AS menu_item_name_en, m.name_ku AS menu_item_name_ku,
                i.quantity, i.unit_price, i.subtotal, i.notes, i.status,
                i.created_at
            FROM order_items i
            LEFT JOIN menu_items m ON m.id = i.menu_item_id
            WHERE i.order_id = ?
            ORDER BY i.id
            "#,
        )
        .bind(order_id)
        .fetch_all(self.base.pool())
        .await?;
        Ok(items)
    }

    /// Total number of orders
    pub async fn total_count(&self) -> RepoResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(self.base.pool())
            .await?;
        Ok(count)
    }

    /// Number of orders in a non-terminal status
    pub async fn active_count(&self) -> RepoResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM orders WHERE status NOT IN ('paid', 'cancelled')",
        )
        .fetch_one(self.base.pool())
        .await?;
        Ok(count)
    }

    /// Revenue aggregates over paid orders
    pub async fn paid_stats(&self) -> RepoResult<PaidOrderStats> {
        let stats = sqlx::query_as::<_, PaidOrderStats>(
            r#"
            SELECT
                COUNT(*) AS paid_orders,
                COALESCE(SUM(final_amount), 0.0) AS total_revenue,
                COALESCE(SUM(discount_amount), 0.0) AS total_discount
            FROM orders
            WHERE status = 'paid'
            "#,
        )
        .fetch_one(self.base.pool())
        .await?;
        Ok(stats)
    }
}
