//! Demo seed data
//!
//! Inserts a small bilingual catalog, tables and staff for development.
//! Applied on startup when `SEED_DEMO=true` and the catalog is empty.

use shared::error::{AppError, AppResult};
use shared::util::now_millis;
use sqlx::SqlitePool;

// Password hashes are owned by the external auth provider; the demo rows
// carry an inert placeholder.
const DEMO_HASH: &str = "$external$managed-by-auth-provider";

/// Seed demo data when the catalog is empty. Returns whether seeding ran.
pub async fn seed_if_empty(pool: &SqlitePool) -> AppResult<bool> {
    let categories: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    if categories > 0 {
        return Ok(false);
    }

    let now = now_millis();
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    let users = [
        ("admin@cafe.com", "Admin User", "admin"),
        ("cashier@cafe.com", "Cashier User", "cashier"),
        ("garson1@cafe.com", "Garson One", "garson"),
        ("garson2@cafe.com", "Garson Two", "garson"),
    ];
    for (email, name, role) in users {
        sqlx::query(
            "INSERT INTO users (email, password_hash, full_name, role, is_active, created_at, updated_at) \
             VALUES (?, ?, ?, ?, 1, ?, ?)",
        )
        .bind(email)
        .bind(DEMO_HASH)
        .bind(name)
        .bind(role)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    }

    let categories = [
        ("Beverages", "Xwarinewa", "Coffee, Tea, Juices and refreshing drinks", 1),
        ("Main Dishes", "Xwardni Serekî", "Traditional Kurdish dishes and international cuisine", 2),
        ("Desserts", "Şîrnok", "Sweet treats, cakes and pastries", 3),
        ("Appetizers", "Mezze", "Fresh salads and delicious starters", 4),
    ];
    for (name_en, name_ku, description_en, display_order) in categories {
        sqlx::query(
            "INSERT INTO categories (name_en, name_ku, description_en, display_order, is_active, created_at) \
             VALUES (?, ?, ?, ?, 1, ?)",
        )
        .bind(name_en)
        .bind(name_ku)
        .bind(description_en)
        .bind(display_order)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    }

    // (category_id, name_en, name_ku, price, prep minutes)
    let menu_items = [
        (1, "Espresso", "Espresso", 2.00, 3),
        (1, "Turkish Coffee", "Qahwa Turkî", 2.50, 5),
        (1, "Fresh Orange Juice", "Aba Prteqalê", 3.00, 4),
        (2, "Kebab Plate", "Kebab", 12.00, 20),
        (2, "Dolma", "Dolme", 10.00, 25),
        (3, "Baklava", "Beqlawe", 4.50, 2),
        (3, "Kunefe", "Kunefe", 5.50, 10),
        (4, "Mixed Mezze", "Mezze Têkel", 7.00, 8),
    ];
    for (category_id, name_en, name_ku, price, prep) in menu_items {
        sqlx::query(
            "INSERT INTO menu_items (category_id, name_en, name_ku, price, is_available, preparation_time, created_at, updated_at) \
             VALUES (?, ?, ?, ?, 1, ?, ?, ?)",
        )
        .bind(category_id)
        .bind(name_en)
        .bind(name_ku)
        .bind(price)
        .bind(prep)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    }

    for n in 1..=8_i64 {
        let capacity = if n <= 5 { 2 } else { 4 };
        sqlx::query(
            "INSERT INTO tables (table_number, qr_code, capacity, status) \
             VALUES (?, ?, ?, 'available')",
        )
        .bind(n)
        .bind(format!("QR-TABLE-{:03}", n))
        .bind(capacity)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    }

    tx.commit()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    tracing::info!("Demo seed data inserted");
    Ok(true)
}
