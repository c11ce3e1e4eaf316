//! Loopring Relay Client CLI
//!
//! Query balances, nonces and allowances, build and send signed
//! transactions, and call relay methods from the command line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

use loopring_relay_client::commands::{
    display_version, execute_query, execute_relay, execute_send, validate_args, QueryArgs,
    QueryKind, RelayArgs, SendArgs,
};
use loopring_relay_client::utils::config::{DEFAULT_RPC_URL, PRIVATE_KEY_ENV_VAR, RPC_URL_ENV_VAR};

/// Loopring Relay Client - chain queries and transaction sending
#[derive(Parser, Debug)]
#[command(name = "relay-cli")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// RPC endpoint URL
    #[arg(short, long, global = true, env = RPC_URL_ENV_VAR, default_value = DEFAULT_RPC_URL)]
    rpc: String,

    /// Request timeout in seconds (transport default when omitted)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Native balance of an address
    Balance {
        address: String,

        /// Confirmation tag: latest, earliest or pending
        #[arg(long, default_value = "latest")]
        tag: String,
    },

    /// ERC20 token balance of an owner
    TokenBalance {
        /// Token contract address
        #[arg(long)]
        token: String,

        #[arg(long)]
        owner: String,

        #[arg(long, default_value = "latest")]
        tag: String,
    },

    /// ERC20 allowance granted by an owner to a spender
    Allowance {
        #[arg(long)]
        token: String,

        #[arg(long)]
        owner: String,

        #[arg(long)]
        spender: String,

        #[arg(long, default_value = "latest")]
        tag: String,
    },

    /// Transaction count (next nonce) of an address
    Nonce {
        address: String,

        #[arg(long, default_value = "pending")]
        tag: String,
    },

    /// Build, sign and submit a transaction
    Send {
        /// Sender's private key (hex)
        #[arg(long, env = PRIVATE_KEY_ENV_VAR, hide_env_values = true)]
        private_key: String,

        /// Recipient address
        #[arg(long)]
        to: String,

        /// Amount in wei, hex quantity
        #[arg(long, default_value = "0x0")]
        value: String,

        /// Gas price in wei, hex quantity
        #[arg(long)]
        gas_price: String,

        /// Gas limit, hex quantity
        #[arg(long, default_value = "0x5208")]
        gas_limit: String,

        /// ABI call data
        #[arg(long, default_value = "0x")]
        data: String,

        /// Explicit nonce (fetched at `pending` when omitted)
        #[arg(long)]
        nonce: Option<String>,

        #[arg(long)]
        chain_id: Option<u64>,

        /// Print the signed transaction instead of submitting it
        #[arg(long)]
        dry_run: bool,
    },

    /// Call a relay method with raw JSON params
    Relay {
        /// Method name, e.g. getTicker or loopring_getTicker
        method: String,

        /// JSON array of params (a single value is wrapped)
        #[arg(default_value = "[]")]
        params: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let rpc_url = cli.rpc;
    let timeout_secs = cli.timeout;

    let query = |tag: String, kind: QueryKind| QueryArgs {
        rpc_url: rpc_url.clone(),
        timeout_secs,
        tag,
        kind,
    };

    // Execute command
    match cli.command {
        Commands::Balance { address, tag } => {
            execute_query(query(tag, QueryKind::Balance { address }))?;
        }

        Commands::TokenBalance { token, owner, tag } => {
            execute_query(query(tag, QueryKind::TokenBalance { token, owner }))?;
        }

        Commands::Allowance {
            token,
            owner,
            spender,
            tag,
        } => {
            execute_query(query(tag, QueryKind::Allowance { token, owner, spender }))?;
        }

        Commands::Nonce { address, tag } => {
            execute_query(query(tag, QueryKind::Nonce { address }))?;
        }

        Commands::Send {
            private_key,
            to,
            value,
            gas_price,
            gas_limit,
            data,
            nonce,
            chain_id,
            dry_run,
        } => {
            let args = SendArgs {
                rpc_url: rpc_url.clone(),
                timeout_secs,
                private_key,
                to,
                value,
                gas_price,
                gas_limit,
                data,
                nonce,
                chain_id,
                dry_run,
            };

            // Validate args first
            validate_args(&args)?;

            execute_send(args)?;
        }

        Commands::Relay { method, params } => {
            execute_relay(RelayArgs {
                rpc_url: rpc_url.clone(),
                timeout_secs,
                method,
                params,
            })?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
