//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::repository::OrderRepository;
use crate::orders::{CreateOrder, OrderUpdate, OrdersManager};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{Order, OrderItem, OrderSummary};
use shared::order::OrderStatus;

/// Query params for listing orders
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub garson_id: Option<i64>,
}

#[derive(Serialize)]
pub struct OrdersResponse {
    pub orders: Vec<OrderSummary>,
}

#[derive(Serialize)]
pub struct OrderResponse {
    pub order: Order,
}

#[derive(Serialize)]
pub struct OrderDetailResponse {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// GET /api/orders?status=&garsonId= - 获取订单列表 (最新在前)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<OrdersResponse>> {
    let repo = OrderRepository::new(state.pool.clone());
    let orders = repo
        .find_all(query.status, query.garson_id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(OrdersResponse { orders }))
}

/// POST /api/orders - 创建订单 (含行项目, 占用桌台)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CreateOrder>,
) -> AppResult<(StatusCode, Json<OrderResponse>)> {
    let manager = OrdersManager::new(state.pool.clone());
    let order = manager.create_order(payload).await?;
    Ok((StatusCode::CREATED, Json(OrderResponse { order })))
}

/// GET /api/orders/:id - 获取单个订单及行项目
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<OrderDetailResponse>> {
    let repo = OrderRepository::new(state.pool.clone());
    let order = repo
        .find_by_id(id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::OrderNotFound, format!("Order {} not found", id))
        })?;
    let items = repo
        .find_items(id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(OrderDetailResponse { order, items }))
}

/// PATCH /api/orders/:id - 部分更新订单 (状态/备注/折扣)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(patch): Json<OrderUpdate>,
) -> AppResult<Json<OrderResponse>> {
    let manager = OrdersManager::new(state.pool.clone());
    let order = manager.update_order(id, patch).await?;
    Ok(Json(OrderResponse { order }))
}
