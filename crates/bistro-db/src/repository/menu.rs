//! # Menu Repository
//!
//! Read access to the `MenuItems` catalog. The menu is written only by the
//! seeder; there is no editing.

use bistro_core::MenuItem;
use sqlx::{SqliteExecutor, SqlitePool};
use tracing::debug;

use crate::error::DbResult;

/// Repository for menu reads.
#[derive(Debug, Clone)]
pub struct MenuRepository {
    pool: SqlitePool,
}

impl MenuRepository {
    /// Creates a new MenuRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MenuRepository { pool }
    }

    /// Returns every menu item.
    ///
    /// No ORDER BY: rows come back in whatever order SQLite stores them.
    pub async fn list_all(&self) -> DbResult<Vec<MenuItem>> {
        let items = sqlx::query_as::<_, MenuItem>(
            "SELECT id, name, price, description FROM MenuItems",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = items.len(), "Loaded menu");
        Ok(items)
    }

    /// Gets a menu item by id.
    ///
    /// ## Returns
    /// * `Ok(Some(MenuItem))` - Item found
    /// * `Ok(None)` - No such id
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<MenuItem>> {
        find_menu_item(&self.pool, id).await
    }

    /// Counts menu items.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM MenuItems")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Looks up one menu item on any executor (pool or open transaction).
pub(crate) async fn find_menu_item<'e, E>(executor: E, id: i64) -> DbResult<Option<MenuItem>>
where
    E: SqliteExecutor<'e>,
{
    let item = sqlx::query_as::<_, MenuItem>(
        "SELECT id, name, price, description FROM MenuItems WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(item)
}
