//! Statistics API Handlers

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::{
    CafeTableRepository, InventoryRepository, OrderRepository, PaymentRepository,
};
use crate::orders::money::{to_decimal, to_f64};
use crate::utils::{AppError, AppResult};

/// Dashboard overview statistics
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_orders: i64,
    pub active_orders: i64,
    pub paid_orders: i64,
    pub total_revenue: f64,
    pub total_discount: f64,
    pub average_order_value: f64,
    pub cash_revenue: f64,
    pub card_revenue: f64,
    pub available_tables: i64,
    pub occupied_tables: i64,
    pub reserved_tables: i64,
    pub low_stock_items: i64,
}

/// GET /api/statistics - 仪表盘概览统计
pub async fn overview(State(state): State<ServerState>) -> AppResult<Json<DashboardStats>> {
    let orders = OrderRepository::new(state.pool.clone());
    let payments = PaymentRepository::new(state.pool.clone());
    let tables = CafeTableRepository::new(state.pool.clone());
    let inventory = InventoryRepository::new(state.pool.clone());

    let total_orders = orders
        .total_count()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    let active_orders = orders
        .active_count()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    let paid = orders
        .paid_stats()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    let split = payments
        .revenue_split()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    let table_counts = tables
        .status_counts()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    let low_stock_items = inventory
        .low_stock_count()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    let average_order_value = if paid.paid_orders > 0 {
        to_f64(to_decimal(paid.total_revenue) / Decimal::from(paid.paid_orders))
    } else {
        0.0
    };

    Ok(Json(DashboardStats {
        total_orders,
        active_orders,
        paid_orders: paid.paid_orders,
        total_revenue: paid.total_revenue,
        total_discount: paid.total_discount,
        average_order_value,
        cash_revenue: split.cash_revenue,
        card_revenue: split.card_revenue,
        available_tables: table_counts.available,
        occupied_tables: table_counts.occupied,
        reserved_tables: table_counts.reserved,
        low_stock_items,
    }))
}
