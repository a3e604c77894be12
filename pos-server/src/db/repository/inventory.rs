//! Inventory Repository
//!
//! The inventory table is a schema stub; stock deduction is out of scope.
//! The dashboard only reads the low-stock count from it.

use super::{BaseRepository, RepoResult};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct InventoryRepository {
    base: BaseRepository,
}

impl InventoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// Number of items at or below their minimum stock level
    pub async fn low_stock_count(&self) -> RepoResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM inventory WHERE current_stock <= minimum_stock",
        )
        .fetch_one(self.base.pool())
        .await?;
        Ok(count)
    }
}
