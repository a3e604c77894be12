//! Unified error handling
//!
//! # 结构
//!
//! - [`codes`] - 错误码定义 (u16, 按域分段)
//! - [`category`] - 错误码分类
//! - [`http`] - HTTP 状态码映射
//! - [`types`] - [`AppError`] / [`AppResult`] 与 axum 集成

pub mod category;
pub mod codes;
pub mod http;
pub mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
