//! Café Table API Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::CafeTableRepository;
use crate::utils::{AppError, AppResult};
use shared::models::CafeTable;

#[derive(Serialize)]
pub struct TablesResponse {
    pub tables: Vec<CafeTable>,
}

/// GET /api/tables - 获取所有桌台 (按桌号排序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<TablesResponse>> {
    let repo = CafeTableRepository::new(state.pool.clone());
    let tables = repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(TablesResponse { tables }))
}
