//! Staff User Repository

use super::{BaseRepository, RepoResult};
use shared::models::User;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// Find user by id (password hash is never selected)
    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, full_name, role, is_active, created_at, updated_at \
             FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.base.pool())
        .await?;
        Ok(user)
    }

    /// Whether an active user with this id exists
    pub async fn exists(&self, id: i64) -> RepoResult<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = ? AND is_active = 1")
                .bind(id)
                .fetch_one(self.base.pool())
                .await?;
        Ok(count > 0)
    }
}
