//! Payment API Handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::core::ServerState;
use crate::orders::{ProcessPayment, SettlementProcessor};
use crate::utils::AppResult;
use shared::models::Payment;

#[derive(Serialize)]
pub struct PaymentResponse {
    pub payment: Payment,
}

/// POST /api/payments - 结算订单 (记录支付, 订单置为已付, 释放桌台)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProcessPayment>,
) -> AppResult<(StatusCode, Json<PaymentResponse>)> {
    let processor = SettlementProcessor::new(state.pool.clone());
    let payment = processor.process_payment(payload).await?;
    Ok((StatusCode::CREATED, Json(PaymentResponse { payment })))
}
