//! Order core
//!
//! # 结构
//!
//! - [`lifecycle`] - 订单创建与状态更新 (OrdersManager)
//! - [`settlement`] - 支付结算 (SettlementProcessor)
//! - [`discount`] - 折扣计算 (纯函数)
//! - [`money`] - Decimal 金额工具

pub mod discount;
pub mod lifecycle;
pub mod money;
pub mod settlement;

pub use discount::DiscountOutcome;
pub use lifecycle::{CreateOrder, OrderUpdate, OrdersManager};
pub use settlement::{ProcessPayment, SettlementProcessor};
