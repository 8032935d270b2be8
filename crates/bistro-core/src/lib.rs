//! # bistro-core: Pure Domain Logic for Bistro
//!
//! Everything the restaurant ordering system knows about menus, orders,
//! money and invoices, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bistro Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/cli (interactive shell)                    │   │
//! │  │    View Menu ──► Place Order ──► Payment ──► Invoice            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bistro-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  invoice  │  │ validation│  │   │
//! │  │   │ MenuItem  │  │   Money   │  │  Invoice  │  │   rules   │  │   │
//! │  │   │  Order    │  │           │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO STDIN                               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    bistro-db (Database Layer)                   │   │
//! │  │          SQLite schema, seeding, menu/customer/order repos      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, Customer, Order, Payment, ...)
//! - [`money`] - Money type with integer arithmetic
//! - [`invoice`] - Printable receipt for a paid order
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation for the shell and repositories
//!
//! ## Example Usage
//!
//! ```rust
//! use bistro_core::money::Money;
//!
//! let burger = Money::from_cents(599);
//! let pizza = Money::from_cents(899);
//!
//! let total = burger * 2 + pizza;
//! assert_eq!(total.to_string(), "$20.97");
//! ```

pub mod error;
pub mod invoice;
pub mod money;
pub mod types;
pub mod validation;

pub use error::{CoreError, ValidationError};
pub use invoice::Invoice;
pub use money::Money;
pub use types::*;

/// Maximum quantity of a single menu item on one order line.
///
/// Stops a mistyped `100` instead of `10` from reaching the kitchen.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Catalog inserted into an empty `MenuItems` table.
///
/// Tuples of (name, price in cents, description).
pub const SAMPLE_MENU: [(&str, i64, &str); 3] = [
    ("Burger", 599, "A delicious beef burger"),
    ("Pizza", 899, "Cheesy pepperoni pizza"),
    ("Salad", 499, "Fresh garden salad"),
];
