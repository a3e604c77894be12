//! Menu Category Model

use serde::{Deserialize, Serialize};

/// Menu category (bilingual, ordered by `display_order`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Category {
    pub id: i64,
    pub name_en: String,
    pub name_ku: String,
    pub description_en: Option<String>,
    pub description_ku: Option<String>,
    pub image_url: Option<String>,
    pub display_order: i64,
    pub is_active: bool,
    pub created_at: i64,
}
