//! Error types for the entire library.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Convenience alias used throughout the library
pub type Result<T> = std::result::Result<T, RelayError>;

/// Errors that can occur while querying the node or preparing a transaction
#[derive(Error, Debug)]
pub enum RelayError {
    /// Malformed address, hex string, private key or confirmation tag
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Raw transaction does not have the expected shape
    #[error("Invalid transaction data: {0}")]
    Schema(String),

    /// Gas limit outside the accepted [21000, 5000000] range
    #[error("Gas limit rejected: {0}")]
    GasLimit(String),

    /// Sender cannot cover `value + gasLimit * gasPrice`
    #[error("Insufficient balance: have {balance} wei, need {needed} wei")]
    InsufficientBalance { balance: String, needed: String },

    /// The node or relay answered with an `error` object
    #[error("RPC error: {message}")]
    Rpc { code: Option<i64>, message: String },

    /// Connection refused, DNS failure, body read failure...
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid RPC response: {0}")]
    InvalidResponse(String),

    #[error("Signing failed: {0}")]
    Signing(String),
}

impl RelayError {
    /// Server-supplied message for `Rpc` errors
    pub fn rpc_message(&self) -> Option<&str> {
        match self {
            RelayError::Rpc { message, .. } => Some(message),
            _ => None,
        }
    }
}
