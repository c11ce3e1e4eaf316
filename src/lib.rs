//! Loopring Relay Client
//!
//! JSON-RPC client and transaction preparation for Ethereum-compatible
//! nodes that also expose the Loopring relay's `loopring_*` methods.
//!
//! ## Getting Started
//!
//! ```ignore
//! use loopring_relay_client::rpc::RpcClient;
//! use loopring_relay_client::tx::{RawTransaction, TransactionBuilder};
//!
//! let client = RpcClient::connect("http://localhost:8545")?;
//! let balance = client.get_account_balance("0x2c7536e3605d9c16a7a3d7b1898e529396a65c23", None)?;
//!
//! let builder = TransactionBuilder::new(&client);
//! let built = builder.generate_tx(raw_tx, &private_key)?;
//! let hash = client.send_signed_tx(built.signed_tx())?;
//! ```
//!
//! Builds for the same sender are not serialized against each other; see
//! [`tx::TransactionBuilder`] before sending concurrently from one address.

pub mod commands;
pub mod query;
pub mod relay;
pub mod rpc;
pub mod tx;
pub mod utils;
pub mod validator;

pub use utils::error::{RelayError, Result};
