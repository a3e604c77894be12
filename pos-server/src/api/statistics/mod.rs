//! Statistics API 模块
//!
//! 管理员/收银台仪表盘的聚合读取接口。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/statistics", get(handler::overview))
}
