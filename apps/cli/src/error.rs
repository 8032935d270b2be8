//! # CLI Error Type
//!
//! What ends a shell session.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Shell                              │
//! │                                                                         │
//! │  Typed at a prompt                                                      │
//! │  ├── ValidationError (bad id, quantity, amount) → message, ask again    │
//! │  ├── DbError::NotFound / InvalidInput           → message, back to menu │
//! │  └── CoreError::InsufficientPayment             → "Order canceled."     │
//! │                                                                         │
//! │  Everything else                                                        │
//! │  └── CliError ──► run() ──► main (anyhow) ──► stderr, exit code 1       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use bistro_core::CoreError;
use bistro_db::DbError;

use crate::config::ConfigError;

/// Fatal shell errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Storage failure (connection, schema, query).
    #[error(transparent)]
    Database(#[from] DbError),

    /// Domain rule failure the shell does not recover from.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Bad flag or environment value.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Reading stdin or writing stdout failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_pass_through() {
        let err: CliError = DbError::MigrationFailed("disk full".to_string()).into();
        assert_eq!(err.to_string(), "Migration failed: disk full");

        let err: CliError = ConfigError::InvalidValue("BISTRO_MAX_CONNECTIONS".to_string()).into();
        assert_eq!(err.to_string(), "Invalid value for BISTRO_MAX_CONNECTIONS");
    }
}
