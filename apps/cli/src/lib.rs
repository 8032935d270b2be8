//! # Bistro CLI Library
//!
//! Startup and the interactive shell for the restaurant ordering system.
//!
//! ## Module Organization
//! ```text
//! bistro_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── Flags, environment, defaults
//! ├── console.rs      ◄─── Prompt / print over async reader and writer
//! ├── shell.rs        ◄─── Main menu loop
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── menu.rs     ◄─── View Menu
//! │   ├── order.rs    ◄─── Place Order (quote, payment, checkout, invoice)
//! │   └── history.rs  ◄─── View Placed Orders
//! └── error.rs        ◄─── CliError
//! ```

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod shell;

use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bistro_db::Database;
use config::{AppConfig, Cli};
use error::CliResult;
use shell::Shell;

/// Runs one interactive session against stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: warn, info for bistro crates; override with RUST_LOG     │
/// │                                                                         │
/// │  2. Resolve Configuration ────────────────────────────────────────────► │
/// │     • --db flag, then BISTRO_DB_PATH, then ./restaurant_ordering.db     │
/// │     • BISTRO_MAX_CONNECTIONS (default 1)                                │
/// │                                                                         │
/// │  3. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode, foreign keys on                             │
/// │     • Create missing tables                                             │
/// │     • Seed the sample menu if MenuItems is empty                        │
/// │                                                                         │
/// │  4. Run Shell ────────────────────────────────────────────────────────► │
/// │     • Loops until "4" or end of input                                   │
/// │     • Closes the pool on the way out                                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> CliResult<()> {
    init_tracing();

    let config = AppConfig::load(cli)?;
    info!(
        db_path = %config.database_path.display(),
        max_connections = config.max_connections,
        "Starting restaurant ordering shell"
    );

    let db = Database::new(config.db_config()).await?;
    let seeded = db.populate_sample_data().await?;
    info!(seeded, "Database ready");

    let input = BufReader::new(tokio::io::stdin());
    let output = tokio::io::stdout();

    let result = Shell::new(db.clone(), input, output).run().await;

    db.close().await;
    result
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with prompts on stdout.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every query-level operation
/// - `RUST_LOG=bistro_db=trace` - Trace for the database crate only
/// - Default: warnings, plus info for the bistro crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,bistro=info,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
