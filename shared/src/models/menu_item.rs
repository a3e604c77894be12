//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub category_id: i64,
    pub name_en: String,
    pub name_ku: String,
    pub description_en: Option<String>,
    pub description_ku: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub is_available: bool,
    /// Preparation time in minutes
    pub preparation_time: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Menu item as served to the menu browsing endpoint, with the category
/// names joined in
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItemView {
    pub id: i64,
    pub category_id: i64,
    pub name_en: String,
    pub name_ku: String,
    pub description_en: Option<String>,
    pub description_ku: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub preparation_time: i64,
    pub category_name_en: Option<String>,
    pub category_name_ku: Option<String>,
}
