//! # Domain Types
//!
//! Core domain types used throughout Bistro.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Persisted rows                                                        │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │    Customer     │   │      Order      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name           │   │  name           │   │  customer_id FK │       │
//! │  │  price (Money)  │   │  address        │   │  menu_item_id FK│       │
//! │  │  description    │   │  contact_info   │   │  quantity       │       │
//! │  └─────────────────┘   └─────────────────┘   │  order_date     │       │
//! │                                              └─────────────────┘       │
//! │  In-flight values                                                      │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   OrderLine     │──►│  OrderSummary   │──►│    Payment      │       │
//! │  │ (id, quantity)  │   │ total + details │   │ tendered/change │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no order header table: an order is the set of `Orders` rows
//! written by one `place_order` call for one customer.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Menu Item
// =============================================================================

/// A catalog entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub price: Money,
    pub description: Option<String>,
}

impl fmt::Display for MenuItem {
    /// One line of the printed menu.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} |Name: {}| Price: {} |Description: {}",
            self.id,
            self.name,
            self.price,
            self.description.as_deref().unwrap_or("")
        )
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer as stored in the `Customers` table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub contact_info: Option<String>,
}

/// Customer details collected by the shell, before an id exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub address: Option<String>,
    pub contact_info: Option<String>,
}

impl NewCustomer {
    /// Builds a customer from raw prompt answers.
    ///
    /// Whitespace is trimmed; blank address or contact become `None`.
    pub fn from_input(name: &str, address: &str, contact_info: &str) -> Self {
        let optional = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };

        NewCustomer {
            name: name.trim().to_string(),
            address: optional(address),
            contact_info: optional(contact_info),
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// One row of the `Orders` table.
///
/// Only `id` is NOT NULL in the schema. Rows this crate writes fill every
/// column, but a file touched by other tools may not, so the rest read back
/// as `Option` and render as `-` when missing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub customer_id: Option<i64>,
    pub menu_item_id: Option<i64>,
    pub quantity: Option<i64>,
    pub order_date: Option<DateTime<Utc>>,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order #{} | Customer: {} | Item: {} | Qty: {} | Date: {}",
            self.id,
            OrMissing(self.customer_id),
            OrMissing(self.menu_item_id),
            OrMissing(self.quantity),
            OrMissing(self.order_date.map(|date| date.format("%Y-%m-%d %H:%M:%S")))
        )
    }
}

/// Displays the value, or `-` for `None`.
struct OrMissing<T>(Option<T>);

impl<T: fmt::Display> fmt::Display for OrMissing<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("-"),
        }
    }
}

/// A requested (menu item, quantity) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub menu_item_id: i64,
    pub quantity: i64,
}

impl OrderLine {
    pub const fn new(menu_item_id: i64, quantity: i64) -> Self {
        OrderLine {
            menu_item_id,
            quantity,
        }
    }
}

/// A priced order line, snapshotting the menu item's name and price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLineDetail {
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
}

impl OrderLineDetail {
    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// Priced lines plus their grand total.
///
/// Returned both by quoting (nothing written) and by placing an order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSummary {
    pub total: Money,
    pub lines: Vec<OrderLineDetail>,
}

impl OrderSummary {
    /// Appends a line and adds its total to the running total.
    pub fn push(&mut self, line: OrderLineDetail) {
        self.total += line.line_total();
        self.lines.push(line);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Payment
// =============================================================================

/// A simulated payment accepted against an order total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payment {
    /// Amount applied to the order (the order total).
    pub amount: Money,
    /// Amount handed over by the customer.
    pub tendered: Money,
    /// `tendered - amount`, never negative.
    pub change: Money,
}

impl Payment {
    /// Accepts `tendered` against `total`.
    ///
    /// ## Returns
    /// * `Ok(Payment)` - tendered ≥ total
    /// * `Err(CoreError::InsufficientPayment)` - tendered < total
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::{Money, Payment};
    ///
    /// let payment = Payment::tender(Money::from_cents(2097), Money::from_cents(2500)).unwrap();
    /// assert_eq!(payment.change.cents(), 403);
    /// ```
    pub fn tender(total: Money, tendered: Money) -> CoreResult<Self> {
        if tendered < total {
            return Err(CoreError::InsufficientPayment { total, tendered });
        }

        Ok(Payment {
            amount: total,
            tendered,
            change: tendered - total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn burger_line(quantity: i64) -> OrderLineDetail {
        OrderLineDetail {
            name: "Burger".to_string(),
            quantity,
            unit_price: Money::from_cents(599),
        }
    }

    #[test]
    fn test_menu_item_display() {
        let item = MenuItem {
            id: 1,
            name: "Burger".to_string(),
            price: Money::from_cents(599),
            description: Some("A delicious beef burger".to_string()),
        };
        assert_eq!(
            item.to_string(),
            "ID: 1 |Name: Burger| Price: $5.99 |Description: A delicious beef burger"
        );
    }

    #[test]
    fn test_order_display() {
        let date = DateTime::parse_from_rfc3339("2024-01-02T03:04:05Z")
            .unwrap()
            .with_timezone(&Utc);
        let order = Order {
            id: 4,
            customer_id: Some(1),
            menu_item_id: Some(2),
            quantity: Some(3),
            order_date: Some(date),
        };
        assert_eq!(
            order.to_string(),
            "Order #4 | Customer: 1 | Item: 2 | Qty: 3 | Date: 2024-01-02 03:04:05"
        );
    }

    #[test]
    fn test_order_display_with_null_columns() {
        let order = Order {
            id: 9,
            customer_id: None,
            menu_item_id: Some(2),
            quantity: None,
            order_date: None,
        };
        assert_eq!(
            order.to_string(),
            "Order #9 | Customer: - | Item: 2 | Qty: - | Date: -"
        );
    }

    #[test]
    fn test_new_customer_trims_and_blanks() {
        let customer = NewCustomer::from_input("  Ada ", "   ", " 555-0100 ");
        assert_eq!(customer.name, "Ada");
        assert_eq!(customer.address, None);
        assert_eq!(customer.contact_info.as_deref(), Some("555-0100"));
    }

    #[test]
    fn test_summary_accumulates_total() {
        let mut summary = OrderSummary::default();
        assert!(summary.is_empty());

        summary.push(burger_line(2));
        summary.push(OrderLineDetail {
            name: "Pizza".to_string(),
            quantity: 1,
            unit_price: Money::from_cents(899),
        });

        assert_eq!(summary.total.cents(), 2097);
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.lines[0].line_total().cents(), 1198);
    }

    #[test]
    fn test_payment_exact_and_over() {
        let total = Money::from_cents(2097);

        let exact = Payment::tender(total, total).unwrap();
        assert!(exact.change.is_zero());

        let over = Payment::tender(total, Money::from_cents(2500)).unwrap();
        assert_eq!(over.amount, total);
        assert_eq!(over.change.cents(), 403);
    }

    #[test]
    fn test_payment_insufficient() {
        let result = Payment::tender(Money::from_cents(2097), Money::from_cents(2096));
        assert!(matches!(
            result,
            Err(CoreError::InsufficientPayment { .. })
        ));
    }
}
