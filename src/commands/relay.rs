//! Generic relay method invocation.

use super::utils::connect;
use crate::relay::RelayMethod;
use anyhow::{Context, Result};
use serde_json::Value;

/// Arguments for the relay command
#[derive(Debug, Clone)]
pub struct RelayArgs {
    pub rpc_url: String,
    pub timeout_secs: Option<u64>,
    /// Method name, with or without the `loopring_` prefix
    pub method: String,
    /// JSON array of positional params
    pub params: String,
}

/// Invoke a relay method and pretty-print its result
///
/// Params are raw JSON, so address positions are checked the same way the
/// typed wrappers check them before anything is sent.
pub fn execute_relay(args: RelayArgs) -> Result<()> {
    let method: RelayMethod = args.method.parse()?;
    let params = parse_params(&args.params)?;

    let client = connect(&args.rpc_url, args.timeout_secs)?;
    let result = client
        .relay_call_checked(method, params)
        .with_context(|| format!("{} failed", method))?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// **Private** - a JSON array, or a single value wrapped as one param
fn parse_params(raw: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(raw).context("params must be valid JSON")?;
    Ok(match value {
        Value::Array(items) => items,
        other => vec![other],
    })
}
