//! Staff User Model

use serde::{Deserialize, Serialize};

/// Staff role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum StaffRole {
    Admin,
    Cashier,
    Garson,
}

/// Staff user
///
/// Credentials live with the external auth provider; the password hash
/// column is never selected into this DTO.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: StaffRole,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}
