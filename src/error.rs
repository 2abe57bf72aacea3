//! Error type for the reminder pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    /// Missing or unparseable required configuration; fatal at startup.
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed date, time, or zone name handed to the time converter.
    /// Aborts the insertion of the record that carried it.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("store error: {0}")]
    Store(#[from] rusqlite::Error),

    /// A record violated a schema-level invariant before it reached SQLite.
    #[error("store invariant violated: {0}")]
    StoreInvariant(String),

    /// The message-delivery capability was unreachable or rejected the send.
    /// Fatal, no retry.
    #[error("delivery error: {0}")]
    Delivery(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T, E = BotError> = std::result::Result<T, E>;
