//! # View Menu

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::debug;

use bistro_db::Database;

use crate::console::Console;
use crate::error::CliResult;

/// Prints every menu item, one per line.
pub async fn view_menu<R, W>(db: &Database, console: &mut Console<R, W>) -> CliResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let items = db.menu().list_all().await?;
    debug!(count = items.len(), "view_menu command");

    console.say("\nMenu Items:").await?;
    for item in &items {
        console.say(item).await?;
    }

    Ok(())
}
