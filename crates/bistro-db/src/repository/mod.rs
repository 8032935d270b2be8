//! # Repository Module
//!
//! Database repository implementations for Bistro.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repositories and their tables                        │
//! │                                                                         │
//! │  Shell command                                                          │
//! │       │                                                                 │
//! │       │  db.orders().checkout(&customer, &lines)                       │
//! │       ▼                                                                 │
//! │  MenuRepository      ── MenuItems  (read only)                         │
//! │  CustomerRepository  ── Customers  (insert, lookup)                    │
//! │  OrderRepository     ── Orders     (quote, place, list)                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lookups that must share a transaction are free functions generic over
//! [`sqlx::SqliteExecutor`], so they run against either the pool or an open
//! transaction.

pub mod customer;
pub mod menu;
pub mod order;
