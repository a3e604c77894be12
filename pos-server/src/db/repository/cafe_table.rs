//! Café Table Repository

use super::{BaseRepository, RepoResult};
use shared::models::CafeTable;
use sqlx::SqlitePool;

/// Table occupancy counts for the dashboard
#[derive(Debug, Clone, Copy, Default)]
pub struct TableStatusCounts {
    pub available: i64,
    pub occupied: i64,
    pub reserved: i64,
}

#[derive(Clone)]
pub struct CafeTableRepository {
    base: BaseRepository,
}

impl CafeTableRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// Find all tables ordered by table number
    pub async fn find_all(&self) -> RepoResult<Vec<CafeTable>> {
        let tables =
            sqlx::query_as::<_, CafeTable>("SELECT * FROM tables ORDER BY table_number")
                .fetch_all(self.base.pool())
                .await?;
        Ok(tables)
    }

    /// Find table by id
    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<CafeTable>> {
        let table = sqlx::query_as::<_, CafeTable>("SELECT * FROM tables WHERE id = ?")
            .bind(id)
            .fetch_optional(self.base.pool())
            .await?;
        Ok(table)
    }

    /// Count tables per occupancy status
    pub async fn status_counts(&self) -> RepoResult<TableStatusCounts> {
        let rows: Vec<(String, i64)> =
            sqlx::query_as("SELECT status, COUNT(*) FROM tables GROUP BY status")
                .fetch_all(self.base.pool())
                .await?;

        let mut counts = TableStatusCounts::default();
        for (status, count) in rows {
            match status.as_str() {
                "available" => counts.available = count,
                "occupied" => counts.occupied = count,
                "reserved" => counts.reserved = count,
                _ => {}
            }
        }
        Ok(counts)
    }
}
