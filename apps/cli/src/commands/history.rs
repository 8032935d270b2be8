//! # View Placed Orders

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::debug;

use bistro_db::Database;

use crate::console::Console;
use crate::error::CliResult;

/// Prints every `Orders` row, unfiltered.
pub async fn view_orders<R, W>(db: &Database, console: &mut Console<R, W>) -> CliResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let orders = db.orders().list_all().await?;
    debug!(count = orders.len(), "view_orders command");

    console.say("\nOrders:").await?;
    for order in &orders {
        console.say(order).await?;
    }

    Ok(())
}
