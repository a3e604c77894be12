//! Menu API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::repository::MenuItemRepository;
use crate::utils::{AppError, AppResult};
use shared::models::MenuItemView;

/// Query params for menu browsing
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default)]
    pub category_id: Option<i64>,
}

#[derive(Serialize)]
pub struct MenuResponse {
    pub items: Vec<MenuItemView>,
}

/// GET /api/menu?categoryId= - 获取可售菜单项 (可按分类过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<MenuResponse>> {
    let repo = MenuItemRepository::new(state.pool.clone());
    let items = repo
        .find_available(query.category_id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(MenuResponse { items }))
}
