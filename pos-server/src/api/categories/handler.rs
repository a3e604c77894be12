//! Category API Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::CategoryRepository;
use crate::utils::{AppError, AppResult};
use shared::models::Category;

#[derive(Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

/// GET /api/categories - 获取所有启用的分类
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<CategoriesResponse>> {
    let repo = CategoryRepository::new(state.pool.clone());
    let categories = repo
        .find_active()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(CategoriesResponse { categories }))
}
