//! # bistro-db: Database Layer for Bistro
//!
//! This crate provides database access for the Bistro ordering shell.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bistro Data Flow                                 │
//! │                                                                         │
//! │  Shell command (place order)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     bistro-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │               │    │  (embedded)  │  │   │
//! │  │   │               │    │ MenuRepo      │    │ 001_initial  │  │   │
//! │  │   │ SqlitePool    │◄───│ CustomerRepo  │    │   _schema    │  │   │
//! │  │   │ Connection    │    │ OrderRepo     │    │              │  │   │
//! │  │   │ Management    │    │               │    │ seed.rs      │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   ./restaurant_ordering.db                                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded schema migrations
//! - [`seed`] - Sample menu for a fresh database
//! - [`error`] - Database error types
//! - [`repository`] - Menu, customer and order repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bistro_core::{NewCustomer, OrderLine};
//! use bistro_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("restaurant_ordering.db")).await?;
//! db.populate_sample_data().await?;
//!
//! let menu = db.menu().list_all().await?;
//! let (customer, summary) = db
//!     .orders()
//!     .checkout(&NewCustomer::from_input("Ada", "", ""), &[OrderLine::new(1, 2)])
//!     .await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::customer::CustomerRepository;
pub use repository::menu::MenuRepository;
pub use repository::order::OrderRepository;
