//! # Shell Commands
//!
//! One module per main-menu option.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── menu.rs     ◄─── 1. View Menu
//! ├── order.rs    ◄─── 2. Place Order
//! └── history.rs  ◄─── 3. View Placed Orders
//! ```
//!
//! Every command receives the database handle and the console explicitly:
//! ```rust,ignore
//! async fn view_menu(db: &Database, console: &mut Console<R, W>) -> CliResult<()>
//! ```

pub mod history;
pub mod menu;
pub mod order;

/// What the shell does after a command returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Show the main menu again.
    Continue,
    /// Input ended mid-command; leave the loop.
    Exit,
}
