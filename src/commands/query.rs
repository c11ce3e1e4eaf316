//! Read-only account queries.

use super::utils::{connect, format_wei};
use anyhow::{Context, Result};
use log::info;

/// Which query to run
#[derive(Debug, Clone)]
pub enum QueryKind {
    Balance { address: String },
    TokenBalance { token: String, owner: String },
    Allowance { token: String, owner: String, spender: String },
    Nonce { address: String },
}

/// Arguments shared by all query commands
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct QueryArgs {
    pub rpc_url: String,
    pub timeout_secs: Option<u64>,
    pub tag: String,
    pub kind: QueryKind,
}

/// Execute a query command and print the result
///
/// # Errors
/// * Invalid address or tag
/// * RPC connection failures or node errors
pub fn execute_query(args: QueryArgs) -> Result<()> {
    let client = connect(&args.rpc_url, args.timeout_secs)?;
    let tag = args.tag.as_str();

    info!("RPC endpoint: {}", args.rpc_url);

    match &args.kind {
        QueryKind::Balance { address } => {
            let wei = client
                .get_account_balance(address, tag)
                .with_context(|| format!("Failed to fetch balance of {}", address))?;
            println!("{} wei ({} ETH)", wei, format_wei(&wei));
        }
        QueryKind::TokenBalance { token, owner } => {
            let amount = client
                .get_token_balance(token, owner, tag)
                .with_context(|| format!("Failed to fetch {} balance of {}", token, owner))?;
            println!("{}", amount);
        }
        QueryKind::Allowance { token, owner, spender } => {
            let amount = client
                .get_token_allowance(token, owner, spender, tag)
                .context("Failed to fetch token allowance")?;
            println!("{}", amount);
        }
        QueryKind::Nonce { address } => {
            let nonce = client
                .get_transaction_count(address, tag)
                .with_context(|| format!("Failed to fetch nonce of {}", address))?;
            println!("{}", nonce);
        }
    }

    Ok(())
}
