//! Shared types for the café POS
//!
//! Common types used across crates: entity DTOs, order domain types,
//! unified error codes and response structures.

pub mod error;
pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

// Error re-exports (for convenient access)
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};

// Order domain re-exports
pub use order::{DiscountSpec, DiscountType, OrderStatus, PaymentMethod, TableStatus};
