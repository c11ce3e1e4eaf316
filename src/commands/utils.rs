use crate::rpc::{HttpTransport, RpcClient};
use crate::utils::config::JSONRPC_VERSION;
use anyhow::{Context, Result};
use num_bigint::BigUint;
use std::time::Duration;

/// Wei per ether
const WEI_DECIMALS: usize = 18;

/// Create a client for the CLI, with an optional timeout in seconds
pub fn connect(rpc_url: &str, timeout_secs: Option<u64>) -> Result<RpcClient<HttpTransport>> {
    if !rpc_url.starts_with("http://") && !rpc_url.starts_with("https://") {
        anyhow::bail!("RPC URL must start with http:// or https://");
    }

    let transport = match timeout_secs {
        Some(secs) => HttpTransport::with_timeout(rpc_url, Duration::from_secs(secs)),
        None => HttpTransport::new(rpc_url),
    }
    .context("Failed to create RPC transport")?;

    Ok(RpcClient::new(transport))
}

/// Render a wei amount in ether with trailing zeros trimmed
pub fn format_wei(wei: &BigUint) -> String {
    let digits = wei.to_str_radix(10);
    let padded = format!("{:0>width$}", digits, width = WEI_DECIMALS + 1);
    let (whole, fraction) = padded.split_at(padded.len() - WEI_DECIMALS);
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, fraction)
    }
}

/// Display version information
pub fn display_version() {
    println!("Loopring Relay Client v{}", env!("CARGO_PKG_VERSION"));
    println!("JSON-RPC: v{}", JSONRPC_VERSION);
    println!();
    println!("Balance queries, transaction signing and Loopring relay access.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_wei() {
        assert_eq!(format_wei(&BigUint::from(0u32)), "0");
        assert_eq!(format_wei(&BigUint::from(1_000_000_000_000_000_000u64)), "1");
        assert_eq!(format_wei(&BigUint::from(1_500_000_000_000_000_000u64)), "1.5");
        assert_eq!(format_wei(&BigUint::from(21_000u32)), "0.000000000000021");
    }

    #[test]
    fn test_connect_rejects_scheme() {
        assert!(connect("ftp://localhost:8545", None).is_err());
        assert!(connect("http://localhost:8545", Some(5)).is_ok());
    }
}
