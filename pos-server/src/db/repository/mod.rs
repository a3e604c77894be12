//! Repository Module
//!
//! Read-side access to the SQLite store. Repositories serve the query
//! endpoints; multi-record mutations (order creation, settlement) are owned
//! by the managers in [`crate::orders`] so they can run inside a single
//! transaction.

// Catalog
pub mod category;
pub mod menu_item;

// Location
pub mod cafe_table;

// Orders
pub mod order;
pub mod payment;

// Staff
pub mod user;

// System
pub mod inventory;

// Re-exports
pub use cafe_table::CafeTableRepository;
pub use category::CategoryRepository;
pub use inventory::InventoryRepository;
pub use menu_item::MenuItemRepository;
pub use order::OrderRepository;
pub use payment::PaymentRepository;
pub use user::UserRepository;

use sqlx::SqlitePool;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepoError::NotFound(err.to_string()),
            _ => RepoError::Database(err.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database pool reference
#[derive(Clone)]
pub struct BaseRepository {
    pool: SqlitePool,
}

impl BaseRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
