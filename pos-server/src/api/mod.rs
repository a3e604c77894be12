//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`categories`] - 分类浏览接口
//! - [`menu`] - 菜单浏览接口
//! - [`tables`] - 桌台状态接口
//! - [`orders`] - 订单管理接口
//! - [`payments`] - 支付结算接口
//! - [`statistics`] - 仪表盘统计接口

pub mod categories;
pub mod health;
pub mod menu;
pub mod orders;
pub mod payments;
pub mod statistics;
pub mod tables;

use axum::Router;

use crate::core::ServerState;

/// Compose all resource routers
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(categories::router())
        .merge(menu::router())
        .merge(tables::router())
        .merge(orders::router())
        .merge(payments::router())
        .merge(statistics::router())
}
