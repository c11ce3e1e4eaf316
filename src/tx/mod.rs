//! Transaction preparation: shape checks, gas and balance policy, nonce
//! resolution, signing and submission.

pub mod builder;
pub mod schema;
pub mod signer;
pub mod submit;

// Re-export main types
pub use builder::{check_gas_limit, required_balance, TransactionBuilder};
pub use schema::{BuiltTransaction, RawTransaction, SignedTransaction};
pub use signer::{Secp256k1Signer, Signer};
