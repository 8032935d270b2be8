//! # Bistro Entry Point
//!
//! ## Startup Sequence
//! 1. Parse flags (`--db`, falling back to `BISTRO_DB_PATH`)
//! 2. Initialize tracing (stderr)
//! 3. Open the database, create the schema, seed the menu
//! 4. Run the shell until the user exits or input ends

use anyhow::Context;
use clap::Parser;

use bistro_cli::config::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The actual setup is in lib.rs so the shell can be tested
    bistro_cli::run(cli)
        .await
        .context("restaurant ordering session failed")
}
