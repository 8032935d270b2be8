//! # Order Repository
//!
//! Pricing, placing and listing orders.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Lifecycle                                   │
//! │                                                                         │
//! │  1. QUOTE (read only)                                                  │
//! │     └── quote_order(lines) → OrderSummary { total, lines }             │
//! │                                                                         │
//! │  2. PAYMENT (bistro-core, no database)                                 │
//! │     └── Payment::tender(total, tendered)                               │
//! │         └── insufficient? stop here, nothing was written               │
//! │                                                                         │
//! │  3. WRITE (one transaction)                                            │
//! │     └── checkout(customer, lines)                                      │
//! │         ├── INSERT Customers                                           │
//! │         ├── INSERT Orders × lines                                      │
//! │         └── COMMIT (or roll back everything on the first error)        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `place_order` is step 3 for a customer that already exists.

use bistro_core::validation::validate_order_lines;
use bistro_core::{Customer, MenuItem, NewCustomer, Order, OrderLine, OrderLineDetail, OrderSummary};
use chrono::Utc;
use sqlx::{SqliteConnection, SqliteExecutor, SqlitePool};
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::repository::customer::{find_customer, insert_customer};
use crate::repository::menu::find_menu_item;

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Prices `lines` against the menu without writing anything.
    ///
    /// ## Returns
    /// * `Ok(OrderSummary)` - One detail per line, in input order
    /// * `Err(DbError::InvalidInput)` - Empty order or bad quantity
    /// * `Err(DbError::NotFound)` - A line references an unknown menu item
    pub async fn quote_order(&self, lines: &[OrderLine]) -> DbResult<OrderSummary> {
        validate_order_lines(lines)?;

        let mut conn = self.pool.acquire().await?;
        let mut summary = OrderSummary::default();

        for line in lines {
            let item = require_menu_item(&mut *conn, line.menu_item_id).await?;
            summary.push(price_line(item, line.quantity));
        }

        debug!(lines = lines.len(), total = %summary.total, "Quoted order");
        Ok(summary)
    }

    /// Writes one `Orders` row per line for an existing customer.
    ///
    /// All lines share one timestamp and one transaction: either every row is
    /// committed or none is.
    ///
    /// ## Returns
    /// * `Ok(OrderSummary)` - Total and (name, quantity, unit price) per line
    /// * `Err(DbError::InvalidInput)` - Empty order or bad quantity
    /// * `Err(DbError::NotFound)` - Unknown customer or menu item
    /// * `Err(DbError::TransactionFailed)` - BEGIN or COMMIT failed
    ///
    /// ## Example
    /// ```rust,ignore
    /// let summary = db.orders()
    ///     .place_order(customer.id, &[OrderLine::new(1, 2), OrderLine::new(2, 1)])
    ///     .await?;
    /// assert_eq!(summary.total.to_string(), "$20.97");
    /// ```
    pub async fn place_order(&self, customer_id: i64, lines: &[OrderLine]) -> DbResult<OrderSummary> {
        validate_order_lines(lines)?;

        let mut tx = self.pool.begin().await.map_err(DbError::transaction)?;

        if find_customer(&mut *tx, customer_id).await?.is_none() {
            return Err(DbError::not_found("Customer", customer_id));
        }

        let summary = write_lines(&mut tx, customer_id, lines).await?;

        tx.commit().await.map_err(DbError::transaction)?;

        info!(customer_id, lines = lines.len(), total = %summary.total, "Order placed");
        Ok(summary)
    }

    /// Inserts a new customer and their order in a single transaction.
    ///
    /// Used once payment has been accepted; a failure leaves neither the
    /// customer nor any order row behind.
    pub async fn checkout(
        &self,
        customer: &NewCustomer,
        lines: &[OrderLine],
    ) -> DbResult<(Customer, OrderSummary)> {
        validate_order_lines(lines)?;

        let mut tx = self.pool.begin().await.map_err(DbError::transaction)?;

        let customer = insert_customer(&mut *tx, customer).await?;
        let summary = write_lines(&mut tx, customer.id, lines).await?;

        tx.commit().await.map_err(DbError::transaction)?;

        info!(
            customer_id = customer.id,
            lines = lines.len(),
            total = %summary.total,
            "Order placed"
        );
        Ok((customer, summary))
    }

    /// Returns every order row, unfiltered.
    ///
    /// No ORDER BY: rows come back in whatever order SQLite stores them.
    pub async fn list_all(&self) -> DbResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            "SELECT id, customer_id, menu_item_id, quantity, order_date FROM Orders",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = orders.len(), "Loaded orders");
        Ok(orders)
    }

    /// Counts order rows.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Inserts the lines on an open transaction's connection.
async fn write_lines(
    conn: &mut SqliteConnection,
    customer_id: i64,
    lines: &[OrderLine],
) -> DbResult<OrderSummary> {
    let order_date = Utc::now();
    let mut summary = OrderSummary::default();

    for line in lines {
        let item = require_menu_item(&mut *conn, line.menu_item_id).await?;

        sqlx::query(
            "INSERT INTO Orders (customer_id, menu_item_id, quantity, order_date) \
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(customer_id)
        .bind(line.menu_item_id)
        .bind(line.quantity)
        .bind(order_date)
        .execute(&mut *conn)
        .await?;

        debug!(customer_id, menu_item_id = item.id, quantity = line.quantity, "Inserted order line");
        summary.push(price_line(item, line.quantity));
    }

    Ok(summary)
}

async fn require_menu_item<'e, E>(executor: E, id: i64) -> DbResult<MenuItem>
where
    E: SqliteExecutor<'e>,
{
    find_menu_item(executor, id)
        .await?
        .ok_or_else(|| DbError::not_found("Menu item", id))
}

fn price_line(item: MenuItem, quantity: i64) -> OrderLineDetail {
    OrderLineDetail {
        name: item.name,
        quantity,
        unit_price: item.price,
    }
}
