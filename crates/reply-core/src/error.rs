//! Error types for the core library.

use thiserror::Error;

use crate::TransactionId;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// No transaction with the requested id exists in the store.
    #[error("Transaction not found: {0}")]
    TransactionNotFound(TransactionId),

    /// A mailbox name could not be parsed.
    #[error("Unknown mailbox: {0}")]
    UnknownMailbox(String),

    /// A theme name could not be parsed.
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// An account directory was built without any user account.
    #[error("Account directory needs at least one user account")]
    EmptyDirectory,

    /// The store backing a view has been dropped.
    #[error("Transaction store closed")]
    StoreClosed,
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
