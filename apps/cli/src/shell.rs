//! # Interactive Shell
//!
//! The main-menu loop.
//!
//! ## States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Shell States                                    │
//! │                                                                         │
//! │             ┌──────────────────────────────────────────┐                │
//! │             ▼                                          │                │
//! │        MainMenu ── "1" ──► ViewMenu ───────────────────┤                │
//! │         │  │  │                                        │                │
//! │         │  │  └─ "2" ──► PlaceOrder ──► Payment ───────┤                │
//! │         │  │                  │            │           │                │
//! │         │  └──── "3" ──► ViewOrders ───────────────────┤                │
//! │         │                     │            │           │                │
//! │         │        other ──► "Invalid option" ───────────┘                │
//! │         │                     │            │                            │
//! │         └─ "4" / EOF ──►   Exit ◄── EOF ◄──┘                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, info};

use bistro_db::Database;

use crate::commands::{history, menu, order, Flow};
use crate::console::Console;
use crate::error::CliResult;

const MAIN_MENU: &str = "\n--- Restaurant Ordering System ---\n\
                         1. View Menu\n\
                         2. Place Order\n\
                         3. View Placed Orders\n\
                         4. Exit";

const FAREWELL: &str = "Thank you for using the Restaurant Ordering System!";

/// A main-menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewMenu,
    PlaceOrder,
    ViewOrders,
    Exit,
}

impl MenuChoice {
    /// Maps the typed option to a choice; `None` for anything but 1-4.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::ViewMenu),
            "2" => Some(MenuChoice::PlaceOrder),
            "3" => Some(MenuChoice::ViewOrders),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Owns the database handle and the console for one session.
pub struct Shell<R, W> {
    db: Database,
    console: Console<R, W>,
}

impl<R, W> Shell<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(db: Database, input: R, output: W) -> Self {
        Shell {
            db,
            console: Console::new(input, output),
        }
    }

    /// Loops until the user picks Exit or input ends.
    pub async fn run(&mut self) -> CliResult<()> {
        loop {
            self.console.say(MAIN_MENU).await?;

            let Some(input) = self.console.prompt("Choose an option: ").await? else {
                debug!("Input ended at main menu");
                break;
            };

            let flow = match MenuChoice::parse(&input) {
                Some(MenuChoice::ViewMenu) => {
                    menu::view_menu(&self.db, &mut self.console).await?;
                    Flow::Continue
                }
                Some(MenuChoice::PlaceOrder) => order::place_order(&self.db, &mut self.console).await?,
                Some(MenuChoice::ViewOrders) => {
                    history::view_orders(&self.db, &mut self.console).await?;
                    Flow::Continue
                }
                Some(MenuChoice::Exit) => Flow::Exit,
                None => {
                    self.console.say("Invalid option, please choose 1-4.").await?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        self.console.say(FAREWELL).await?;
        self.console.flush().await?;

        info!("Session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_db::DbConfig;
    use pretty_assertions::assert_eq;

    async fn seeded() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.populate_sample_data().await.unwrap();
        db
    }

    async fn session(db: &Database, script: &str) -> String {
        let mut output = Vec::new();
        Shell::new(db.clone(), script.as_bytes(), &mut output)
            .run()
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::ViewMenu));
        assert_eq!(MenuChoice::parse(" 4 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
    }

    #[tokio::test]
    async fn test_view_menu_then_exit() {
        let db = seeded().await;

        let output = session(&db, "1\n4\n").await;

        assert!(output.starts_with(
            "\n--- Restaurant Ordering System ---\n1. View Menu\n2. Place Order\n\
             3. View Placed Orders\n4. Exit\nChoose an option: "
        ));
        assert!(output.contains("\nMenu Items:\n"));
        assert!(output.contains(
            "ID: 1 |Name: Burger| Price: $5.99 |Description: A delicious beef burger\n"
        ));
        assert!(output.contains("ID: 2 |Name: Pizza| Price: $8.99 |Description: Cheesy pepperoni pizza\n"));
        assert!(output.contains("ID: 3 |Name: Salad| Price: $4.99 |Description: Fresh garden salad\n"));
        assert!(output.ends_with("Thank you for using the Restaurant Ordering System!\n"));
    }

    #[tokio::test]
    async fn test_successful_order_prints_invoice_and_writes_rows() {
        let db = seeded().await;

        let output = session(
            &db,
            "2\nAda\n12 Analytical Way\n555-0100\n1\n2\n2\n1\ndone\n25\n4\n",
        )
        .await;

        assert!(output.contains("Enter payment amount: $20.97: "));
        assert!(output.contains("Payment successful!\n"));

        let invoice_start = output.find("--- Order Invoice ---").unwrap();
        let invoice_end = output.find("--- Thank you for your order! ---").unwrap();
        let invoice: Vec<&str> = output[invoice_start..invoice_end].lines().collect();

        assert!(invoice[1].starts_with("Invoice Reference: "));
        assert_eq!(invoice[1].len(), "Invoice Reference: ".len() + 36);
        assert!(invoice[2].starts_with("Date and Time: "));
        assert_eq!(
            invoice[3..],
            [
                "Customer Name: Ada",
                "Customer Address: 12 Analytical Way",
                "Customer Contact Number: 555-0100",
                "",
                "Ordered Items:",
                "Burger (x2) - $5.99 each",
                "Pizza (x1) - $8.99 each",
                "",
                "Net Total: $20.97",
                "Amount Paid: $25.00",
                "Change: $4.03",
                "",
            ]
        );

        assert_eq!(db.customers().count().await.unwrap(), 1);
        let orders = db.orders().list_all().await.unwrap();
        assert_eq!(orders.len(), 2);
        assert!(orders.iter().all(|o| o.customer_id == orders[0].customer_id));
    }

    #[tokio::test]
    async fn test_insufficient_payment_writes_nothing() {
        let db = seeded().await;

        let output = session(&db, "2\nAda\n\n\n1\n1\ndone\n5\n4\n").await;

        assert!(output.contains("Enter payment amount: $5.99: "));
        assert!(output.contains("Insufficient payment. Order canceled.\n"));
        assert!(!output.contains("--- Order Invoice ---"));
        assert_eq!(db.customers().count().await.unwrap(), 0);
        assert_eq!(db.orders().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_invalid_input_is_asked_again() {
        let db = seeded().await;

        let script = "2\n\nAda\n\n\nabc\n42\n1\n0\nx\n2\ndone\nabc\n-1\n12\n4\n";
        let output = session(&db, script).await;

        assert_eq!(output.matches("Enter your name: ").count(), 2);
        assert_eq!(output.matches("Enter item ID: ").count(), 4);
        assert_eq!(output.matches("Enter quantity for item 1: ").count(), 3);
        assert_eq!(output.matches("Enter payment amount: $11.98: ").count(), 3);
        assert!(output.contains("No menu item with ID 42.\n"));
        assert!(output.contains("Invalid input: item ID has invalid format: 'abc' is not a whole number\n"));
        assert!(output.contains("Invalid input: quantity must be between 1 and 999\n"));
        assert!(output.contains("Change: $0.02"));

        let orders = db.orders().list_all().await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!((orders[0].menu_item_id, orders[0].quantity), (Some(1), Some(2)));
    }

    #[tokio::test]
    async fn test_duplicate_items_stay_separate_lines() {
        let db = seeded().await;

        let output = session(&db, "2\nAda\n\n\n3\n1\n3\n2\nDONE\n15\n4\n").await;

        assert!(output.contains("Salad (x1) - $4.99 each\nSalad (x2) - $4.99 each\n"));
        assert!(output.contains("Net Total: $14.97"));
        assert_eq!(db.orders().count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_empty_order_is_canceled() {
        let db = seeded().await;

        let output = session(&db, "2\nAda\n\n\ndone\n4\n").await;

        assert!(output.contains("No items selected. Order canceled.\n"));
        assert!(!output.contains("Enter payment amount"));
        assert_eq!(db.customers().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_view_placed_orders() {
        let db = seeded().await;

        let output = session(&db, "2\nAda\n\n\n2\n3\ndone\n30\n3\n4\n").await;

        let orders_section = &output[output.rfind("\nOrders:\n").unwrap()..];
        assert!(orders_section.contains("Order #1 | Customer: 1 | Item: 2 | Qty: 3 | Date: "));
    }

    #[tokio::test]
    async fn test_view_orders_with_null_columns_keeps_session() {
        let db = seeded().await;
        sqlx::query(
            "INSERT INTO Orders (customer_id, menu_item_id, quantity, order_date) \
             VALUES (NULL, 1, NULL, NULL)",
        )
        .execute(db.pool())
        .await
        .unwrap();

        let output = session(&db, "3\n1\n4\n").await;

        assert!(output.contains("\nOrders:\nOrder #1 | Customer: - | Item: 1 | Qty: - | Date: -\n"));
        assert!(output.contains("\nMenu Items:\n"));
        assert!(output.ends_with("Thank you for using the Restaurant Ordering System!\n"));
    }

    #[tokio::test]
    async fn test_invalid_option() {
        let db = seeded().await;

        let output = session(&db, "9\n4\n").await;

        assert!(output.contains("Invalid option, please choose 1-4.\n"));
        assert_eq!(output.matches("Choose an option: ").count(), 2);
    }

    #[tokio::test]
    async fn test_end_of_input_exits() {
        let db = seeded().await;

        let output = session(&db, "").await;
        assert!(output.ends_with("Choose an option: Thank you for using the Restaurant Ordering System!\n"));

        // Input ends halfway through an order: nothing is written
        let output = session(&db, "2\nAda\n\n\n1\n").await;
        assert!(output.ends_with("Thank you for using the Restaurant Ordering System!\n"));
        assert_eq!(db.customers().count().await.unwrap(), 0);
        assert_eq!(db.orders().count().await.unwrap(), 0);
    }
}
