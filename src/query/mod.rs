//! Chain state queries: balances, allowances, nonces and raw `eth_call`.
//!
//! Every query validates its inputs before the first network call.

pub mod abi;
pub mod account;
pub mod quantity;

pub use abi::{encode_allowance, encode_balance_of, function_selector};
pub use account::CallRequest;
pub use quantity::{canonicalize_hex, parse_quantity, to_quantity};
