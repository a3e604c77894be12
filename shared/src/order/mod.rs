//! Order domain module

pub mod types;

pub use types::{
    DiscountSpec, DiscountType, ItemStatus, OrderItemInput, OrderStatus, PaymentMethod,
    TableStatus,
};
