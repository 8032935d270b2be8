//! # Place Order
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Place Order                                      │
//! │                                                                         │
//! │  1. Customer details ── name (required), address, contact number       │
//! │  2. Menu printed                                                        │
//! │  3. Items ── "Enter item ID:" / "Enter quantity for item N:"           │
//! │             until "done"; bad input is reported and asked again         │
//! │  4. Quote ── OrderRepository::quote_order (nothing written)            │
//! │  5. Payment ── "Enter payment amount: $T:"                             │
//! │       ├── short → "Insufficient payment. Order canceled." (no rows)    │
//! │       └── ok    → checkout (customer + lines, one transaction)         │
//! │  6. Invoice printed                                                     │
//! │                                                                         │
//! │  End of input at any prompt returns Flow::Exit with nothing written.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, info};

use bistro_core::validation::{parse_menu_item_id, parse_quantity, validate_customer_name};
use bistro_core::{CoreError, Invoice, Money, NewCustomer, OrderLine, Payment};
use bistro_db::{Database, DbError};

use crate::commands::{menu, Flow};
use crate::console::Console;
use crate::error::CliResult;

/// Runs the whole ordering conversation for one customer.
pub async fn place_order<R, W>(db: &Database, console: &mut Console<R, W>) -> CliResult<Flow>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    debug!("place_order command");

    let Some(customer) = collect_customer(console).await? else {
        return Ok(Flow::Exit);
    };

    menu::view_menu(db, console).await?;
    console
        .say("\nSelect items (enter item ID and quantity). Type 'done' when finished.")
        .await?;

    let Some(lines) = collect_lines(db, console).await? else {
        return Ok(Flow::Exit);
    };

    if lines.is_empty() {
        console.say("No items selected. Order canceled.").await?;
        return Ok(Flow::Continue);
    }

    let quote = match db.orders().quote_order(&lines).await {
        Ok(quote) => quote,
        Err(err) => return cancel(console, err).await,
    };

    let Some(tendered) = collect_payment(console, quote.total).await? else {
        return Ok(Flow::Exit);
    };

    let payment = match Payment::tender(quote.total, tendered) {
        Ok(payment) => payment,
        Err(CoreError::InsufficientPayment { total, tendered }) => {
            info!(%total, %tendered, "Order canceled: insufficient payment");
            console.say("Insufficient payment. Order canceled.").await?;
            return Ok(Flow::Continue);
        }
        Err(err) => return Err(err.into()),
    };

    let (customer, summary) = match db.orders().checkout(&customer, &lines).await {
        Ok(placed) => placed,
        Err(err) => return cancel(console, err).await,
    };

    console.say("Payment successful!").await?;

    let invoice = Invoice::new(customer, summary, payment);
    info!(reference = %invoice.reference, total = %invoice.summary.total, "Invoice issued");
    console.say(format!("\n{invoice}")).await?;

    Ok(Flow::Continue)
}

async fn collect_customer<R, W>(console: &mut Console<R, W>) -> CliResult<Option<NewCustomer>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let name = loop {
        let Some(name) = console.prompt("Enter your name: ").await? else {
            return Ok(None);
        };

        match validate_customer_name(&name) {
            Ok(()) => break name,
            Err(err) => {
                debug!(%err, "Rejected customer name");
                console.say(format!("Invalid input: {err}")).await?;
            }
        }
    };

    let Some(address) = console.prompt("Enter your address: ").await? else {
        return Ok(None);
    };
    let Some(contact) = console.prompt("Enter your contact number: ").await? else {
        return Ok(None);
    };

    Ok(Some(NewCustomer::from_input(&name, &address, &contact)))
}

/// Reads (item, quantity) pairs until "done". Duplicate items stay separate lines.
async fn collect_lines<R, W>(db: &Database, console: &mut Console<R, W>) -> CliResult<Option<Vec<OrderLine>>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = Vec::new();

    loop {
        let Some(input) = console.prompt("Enter item ID: ").await? else {
            return Ok(None);
        };
        let input = input.trim();

        if input.eq_ignore_ascii_case("done") {
            return Ok(Some(lines));
        }

        let menu_item_id = match parse_menu_item_id(input) {
            Ok(id) => id,
            Err(err) => {
                debug!(%err, "Rejected item ID");
                console.say(format!("Invalid input: {err}")).await?;
                continue;
            }
        };

        if db.menu().get_by_id(menu_item_id).await?.is_none() {
            debug!(menu_item_id, "Item not on the menu");
            console
                .say(format!("No menu item with ID {menu_item_id}."))
                .await?;
            continue;
        }

        let prompt = format!("Enter quantity for item {menu_item_id}: ");
        let quantity = loop {
            let Some(input) = console.prompt(&prompt).await? else {
                return Ok(None);
            };

            match parse_quantity(&input) {
                Ok(quantity) => break quantity,
                Err(err) => {
                    debug!(%err, "Rejected quantity");
                    console.say(format!("Invalid input: {err}")).await?;
                }
            }
        };

        lines.push(OrderLine::new(menu_item_id, quantity));
    }
}

async fn collect_payment<R, W>(console: &mut Console<R, W>, total: Money) -> CliResult<Option<Money>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let prompt = format!("Enter payment amount: {total}: ");

    loop {
        let Some(input) = console.prompt(&prompt).await? else {
            return Ok(None);
        };

        match input.parse::<Money>() {
            Ok(amount) => return Ok(Some(amount)),
            Err(err) => {
                debug!(%err, "Rejected payment amount");
                console.say(format!("Invalid input: {err}")).await?;
            }
        }
    }
}

/// Reports a rejected order and returns to the main menu; storage failures propagate.
async fn cancel<R, W>(console: &mut Console<R, W>, err: DbError) -> CliResult<Flow>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    if !err.is_user_error() {
        return Err(err.into());
    }

    info!(%err, "Order canceled");
    console.say(format!("Order canceled: {err}")).await?;
    Ok(Flow::Continue)
}
