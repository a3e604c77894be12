//! Entity DTOs
//!
//! Wire-format models (camelCase JSON). With the `db` feature enabled they
//! double as sqlx row types; column names match the snake_case fields.

pub mod cafe_table;
pub mod category;
pub mod menu_item;
pub mod order;
pub mod payment;
pub mod user;

pub use cafe_table::CafeTable;
pub use category::Category;
pub use menu_item::{MenuItem, MenuItemView};
pub use order::{Order, OrderItem, OrderSummary};
pub use payment::Payment;
pub use user::{StaffRole, User};
