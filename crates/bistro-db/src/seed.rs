//! # Sample Data
//!
//! Puts the starter menu into a fresh database.
//!
//! ```text
//! SELECT id FROM MenuItems LIMIT 1
//!      │
//!      ├── row found → leave the menu alone (return 0)
//!      │
//!      └── empty     → INSERT Burger, Pizza, Salad in one transaction (return 3)
//! ```

use bistro_core::{Money, SAMPLE_MENU};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};

/// Inserts [`SAMPLE_MENU`] if `MenuItems` has no rows.
///
/// ## Returns
/// Number of rows inserted: `SAMPLE_MENU.len()` on an empty table, 0 otherwise.
pub async fn populate_sample_data(pool: &SqlitePool) -> DbResult<usize> {
    let mut tx = pool.begin().await.map_err(DbError::transaction)?;

    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM MenuItems LIMIT 1")
        .fetch_optional(&mut *tx)
        .await?;

    if existing.is_some() {
        debug!("Menu already populated, skipping sample data");
        return Ok(0);
    }

    for (name, price_cents, description) in SAMPLE_MENU {
        sqlx::query("INSERT INTO MenuItems (name, price, description) VALUES (?1, ?2, ?3)")
            .bind(name)
            .bind(Money::from_cents(price_cents))
            .bind(description)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await.map_err(DbError::transaction)?;

    info!(count = SAMPLE_MENU.len(), "Sample menu inserted");
    Ok(SAMPLE_MENU.len())
}
