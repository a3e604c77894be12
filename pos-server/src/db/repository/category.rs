//! Category Repository

use super::{BaseRepository, RepoResult};
use shared::models::Category;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// Find all active categories ordered by display order
    pub async fn find_active(&self) -> RepoResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT * FROM categories WHERE is_active = 1 ORDER BY display_order",
        )
        .fetch_all(self.base.pool())
        .await?;
        Ok(categories)
    }
}
