//! # Schema Initialization
//!
//! Embedded SQL migrations that create the `MenuItems`, `Customers` and
//! `Orders` tables.
//!
//! ## How It Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Startup Schema Check                               │
//! │                                                                         │
//! │  Shell starts                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Check _sqlx_migrations table (created if missing)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  001_initial_schema.sql applied?                                       │
//! │       ├── yes → nothing to do                                          │
//! │       └── no  → CREATE TABLE IF NOT EXISTS × 3                         │
//! │                 (no-op on files written by earlier releases)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Seed sample menu (seed.rs)                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The schema is additive only. New files go in `migrations/sqlite/` with the
//! next sequence number; existing files are never edited.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::DbResult;

/// Embedded migrations from the workspace `migrations/sqlite` directory.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Creates any missing tables.
///
/// ## Safety
/// - Idempotent: safe to run multiple times
/// - Transactional: each migration runs in a transaction
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    debug!("Checking for pending migrations");

    MIGRATOR.run(pool).await?;

    info!("Schema ready");
    Ok(())
}

/// Returns (embedded_migrations, applied_migrations).
pub async fn migration_status(pool: &SqlitePool) -> DbResult<(usize, usize)> {
    let total = MIGRATOR.migrations.len();

    // Table is absent until the first run
    let tracked: Option<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name = '_sqlx_migrations'",
    )
    .fetch_optional(pool)
    .await?;

    if tracked.is_none() {
        return Ok((total, 0));
    }

    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await?;

    Ok((total, applied as usize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn table_names(pool: &SqlitePool) -> Vec<String> {
        sqlx::query_scalar(
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE '\\_%' ESCAPE '\\' AND name NOT LIKE 'sqlite%' \
             ORDER BY name",
        )
        .fetch_all(pool)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_initializer_is_idempotent() {
        let db = Database::new(DbConfig::in_memory().run_migrations(false))
            .await
            .unwrap();

        run_migrations(db.pool()).await.unwrap();
        let first = table_names(db.pool()).await;

        run_migrations(db.pool()).await.unwrap();
        let second = table_names(db.pool()).await;

        assert_eq!(first, vec!["Customers", "MenuItems", "Orders"]);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_existing_tables_are_left_alone() {
        let db = Database::new(DbConfig::in_memory().run_migrations(false))
            .await
            .unwrap();

        // A file created before migrations were tracked
        sqlx::query(
            "CREATE TABLE MenuItems (id INTEGER PRIMARY KEY, name TEXT NOT NULL, \
             price REAL NOT NULL, description TEXT)",
        )
        .execute(db.pool())
        .await
        .unwrap();
        sqlx::query("INSERT INTO MenuItems (name, price, description) VALUES ('Soup', 3.5, NULL)")
            .execute(db.pool())
            .await
            .unwrap();

        run_migrations(db.pool()).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM MenuItems")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(
            table_names(db.pool()).await,
            vec!["Customers", "MenuItems", "Orders"]
        );
    }

    #[tokio::test]
    async fn test_migration_status() {
        let db = Database::new(DbConfig::in_memory().run_migrations(false))
            .await
            .unwrap();
        assert_eq!(migration_status(db.pool()).await.unwrap(), (1, 0));

        run_migrations(db.pool()).await.unwrap();
        assert_eq!(migration_status(db.pool()).await.unwrap(), (1, 1));
    }

    #[tokio::test]
    async fn test_migration_status_reports_storage_errors() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.close().await;

        assert!(migration_status(db.pool()).await.is_err());
    }
}
