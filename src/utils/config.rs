//! Configuration and constants for the client.

/// Endpoint used when neither `--rpc` nor `RELAY_RPC_URL` is given
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// Environment variable holding the RPC endpoint URL
pub const RPC_URL_ENV_VAR: &str = "RELAY_RPC_URL";

/// Environment variable holding the sender's private key (send command only)
pub const PRIVATE_KEY_ENV_VAR: &str = "RELAY_PRIVATE_KEY";

pub const JSONRPC_VERSION: &str = "2.0";

/// Random bytes per request id (hex encoded on the wire)
pub const REQUEST_ID_BYTES: usize = 16;

// Gas bounds for generated transactions
// 21000 is the intrinsic cost of a plain value transfer
pub const MIN_GAS_LIMIT: u64 = 21_000;
pub const MAX_GAS_LIMIT: u64 = 5_000_000;

pub const DEFAULT_CHAIN_ID: u64 = 1;

/// Longest hex quantity accepted in a raw transaction (32 bytes)
pub const MAX_QUANTITY_HEX_DIGITS: usize = 64;
