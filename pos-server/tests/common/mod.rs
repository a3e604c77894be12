//! Shared test fixtures: in-memory database with a minimal catalog.

use shared::util::now_millis;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// In-memory SQLite pool with migrations applied.
///
/// Single connection: each SQLite `:memory:` connection is its own database.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .pragma("foreign_keys", "ON");
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("in-memory pool");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");
    pool
}

/// Insert fixtures:
/// - user 1: cashier, user 2: garson
/// - category 1: Beverages
/// - menu item 1: Espresso 2.00, menu item 2: Kebab Plate 12.00
/// - tables 1..=3, all available
pub async fn seed_fixtures(pool: &SqlitePool) {
    let now = now_millis();

    for (email, name, role) in [
        ("cashier@cafe.com", "Cashier User", "cashier"),
        ("garson1@cafe.com", "Garson One", "garson"),
    ] {
        sqlx::query(
            "INSERT INTO users (email, password_hash, full_name, role, is_active, created_at, updated_at) \
             VALUES (?, 'x', ?, ?, 1, ?, ?)",
        )
        .bind(email)
        .bind(name)
        .bind(role)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await
        .unwrap();
    }

    sqlx::query(
        "INSERT INTO categories (name_en, name_ku, display_order, is_active, created_at) \
         VALUES ('Beverages', 'Xwarinewa', 1, 1, ?)",
    )
    .bind(now)
    .execute(pool)
    .await
    .unwrap();

    for (name_en, name_ku, price, prep) in [
        ("Espresso", "Espresso", 2.00_f64, 3_i64),
        ("Kebab Plate", "Kebab", 12.00, 20),
    ] {
        sqlx::query(
            "INSERT INTO menu_items (category_id, name_en, name_ku, price, is_available, preparation_time, created_at, updated_at) \
             VALUES (1, ?, ?, ?, 1, ?, ?, ?)",
        )
        .bind(name_en)
        .bind(name_ku)
        .bind(price)
        .bind(prep)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await
        .unwrap();
    }

    for n in 1..=3_i64 {
        sqlx::query(
            "INSERT INTO tables (table_number, qr_code, capacity, status) \
             VALUES (?, ?, 2, 'available')",
        )
        .bind(n)
        .bind(format!("QR-TABLE-{:03}", n))
        .execute(pool)
        .await
        .unwrap();
    }
}

pub const CASHIER_ID: i64 = 1;
pub const GARSON_ID: i64 = 2;
