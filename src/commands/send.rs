//! Send command implementation.
//!
//! The send command:
//! 1. Validates the CLI arguments
//! 2. Builds and signs the transaction (balance and nonce come from the node)
//! 3. Prints the signed payload, or submits it and prints the hash

use super::utils::connect;
use crate::tx::{RawTransaction, TransactionBuilder};
use crate::utils::config::DEFAULT_RPC_URL;
use crate::validator::is_valid_address;
use anyhow::{Context, Result};
use log::info;
use std::time::Instant;

/// Arguments for the send command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct SendArgs {
    /// RPC endpoint URL
    pub rpc_url: String,

    pub timeout_secs: Option<u64>,

    /// Sender's private key (hex)
    pub private_key: String,

    /// Recipient address
    pub to: String,

    /// Amount in wei (hex quantity)
    pub value: String,

    pub gas_price: String,

    pub gas_limit: String,

    /// ABI call data, `0x` for a plain transfer
    pub data: String,

    /// Explicit nonce; fetched from the node when absent
    pub nonce: Option<String>,

    pub chain_id: Option<u64>,

    /// Sign only, do not submit
    pub dry_run: bool,
}

impl Default for SendArgs {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            timeout_secs: None,
            private_key: String::new(),
            to: String::new(),
            value: "0x0".to_string(),
            gas_price: String::new(),
            gas_limit: "0x5208".to_string(),
            data: "0x".to_string(),
            nonce: None,
            chain_id: None,
            dry_run: false,
        }
    }
}

impl SendArgs {
    fn raw_transaction(&self) -> RawTransaction {
        RawTransaction {
            nonce: self.nonce.clone(),
            gas_price: self.gas_price.clone(),
            gas_limit: self.gas_limit.clone(),
            to: self.to.clone(),
            value: self.value.clone(),
            data: self.data.clone(),
            chain_id: self.chain_id,
        }
    }
}

/// Execute the send command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Transaction field, gas limit or balance check failures
/// * RPC connection failures
/// * Node rejection of the signed transaction
pub fn execute_send(args: SendArgs) -> Result<()> {
    let start_time = Instant::now();

    let client = connect(&args.rpc_url, args.timeout_secs)?;
    let builder = TransactionBuilder::new(&client);

    info!("Building transaction to {}", args.to);
    let built = builder
        .generate_tx(args.raw_transaction(), &args.private_key)
        .context("Failed to build transaction")?;

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&built)?);
        return Ok(());
    }

    let hash = client
        .send_signed_tx(built.signed_tx())
        .context("Failed to submit transaction")?;

    println!("{}", hash);
    info!("Send completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(())
}

/// Validate send arguments
///
/// **Public** - can be called before execute_send for early validation
pub fn validate_args(args: &SendArgs) -> Result<()> {
    if args.rpc_url.is_empty() {
        anyhow::bail!("RPC URL cannot be empty");
    }

    if args.private_key.is_empty() {
        anyhow::bail!("Private key is required (--private-key or RELAY_PRIVATE_KEY)");
    }

    if !is_valid_address(&args.to) {
        anyhow::bail!("Recipient must be a 20-byte hex address");
    }

    if args.gas_price.is_empty() {
        anyhow::bail!("Gas price cannot be empty");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_args() -> SendArgs {
        SendArgs {
            private_key: "0x4646464646464646464646464646464646464646464646464646464646464646".to_string(),
            to: "0x3535353535353535353535353535353535353535".to_string(),
            gas_price: "0x4a817c800".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_args_valid() {
        assert!(validate_args(&valid_args()).is_ok());
    }

    #[test]
    fn test_validate_args_missing_key() {
        let args = SendArgs {
            private_key: String::new(),
            ..valid_args()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_bad_recipient() {
        let args = SendArgs {
            to: "0x1234".to_string(),
            ..valid_args()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_raw_transaction_carries_fields() {
        let raw = valid_args().raw_transaction();
        assert_eq!(raw.gas_limit, "0x5208");
        assert_eq!(raw.data, "0x");
        assert!(raw.nonce.is_none());
        assert!(raw.validate().is_ok());
    }
}
