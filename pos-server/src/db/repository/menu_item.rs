//! Menu Item Repository

use super::{BaseRepository, RepoResult};
use shared::models::{MenuItem, MenuItemView};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// Find all available menu items, optionally filtered by category,
    /// with category names joined in
    pub async fn find_available(&self, category_id: Option<i64>) -> RepoResult<Vec<MenuItemView>> {
        let items = sqlx::query_as::<_, MenuItemView>(
            r#"
            SELECT
                m.id, m.category_id, m.name_en, m.name_ku,
                m.description_en, m.description_ku,
                m.price, m.image_url, m.is_available, m.preparation_time,
                c.name_en AS category_name_en, c.name_ku AS category_name_ku
            FROM menu_items m
            LEFT JOIN categories c ON c.id = m.category_id
            WHERE m.is_available = 1
              AND (?1 IS NULL OR m.category_id = ?1)
            ORDER BY m.category_id, m.id
            "#,
        )
        .bind(category_id)
        .fetch_all(self.base.pool())
        .await?;
        Ok(items)
    }

    /// Find menu item by id
    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<MenuItem>> {
        let item = sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items WHERE id = ?")
            .bind(id)
            .fetch_optional(self.base.pool())
            .await?;
        Ok(item)
    }
}
