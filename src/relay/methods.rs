//! Relay method catalog and wrappers.

use super::filters::{FillFilter, RingMinedFilter};
use crate::rpc::{RpcClient, Transport};
use crate::tx::{RawTransaction, Signer, TransactionBuilder};
use crate::utils::error::{RelayError, Result};
use crate::validator::{require_address, IntoTag};
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

/// Custom `loopring_*` methods exposed by the relay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelayMethod {
    GetCutoff,
    SubmitOrder,
    GetOrders,
    GetDepth,
    GetTicker,
    GetFills,
    GetTrend,
    GetRingMined,
    GetBalance,
    GetPriceQuote,
    GetEstimatedAllocatedAllowance,
}

impl RelayMethod {
    pub const ALL: [RelayMethod; 11] = [
        RelayMethod::GetCutoff,
        RelayMethod::SubmitOrder,
        RelayMethod::GetOrders,
        RelayMethod::GetDepth,
        RelayMethod::GetTicker,
        RelayMethod::GetFills,
        RelayMethod::GetTrend,
        RelayMethod::GetRingMined,
        RelayMethod::GetBalance,
        RelayMethod::GetPriceQuote,
        RelayMethod::GetEstimatedAllocatedAllowance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RelayMethod::GetCutoff => "loopring_getCutoff",
            RelayMethod::SubmitOrder => "loopring_submitOrder",
            RelayMethod::GetOrders => "loopring_getOrders",
            RelayMethod::GetDepth => "loopring_getDepth",
            RelayMethod::GetTicker => "loopring_getTicker",
            RelayMethod::GetFills => "loopring_getFills",
            RelayMethod::GetTrend => "loopring_getTrend",
            RelayMethod::GetRingMined => "loopring_getRingMined",
            RelayMethod::GetBalance => "loopring_getBalance",
            RelayMethod::GetPriceQuote => "loopring_getPriceQuote",
            RelayMethod::GetEstimatedAllocatedAllowance => {
                "loopring_getEstimatedAllocatedAllowance"
            }
        }
    }
}

impl RelayMethod {
    /// Check the address positions of hand-shaped params
    ///
    /// Mirrors the checks the typed wrappers make, for callers that only
    /// have raw JSON params.
    pub fn validate_params(&self, params: &[Value]) -> Result<()> {
        let first = params.first();
        match self {
            RelayMethod::GetCutoff => require_address_value(first, "account"),
            RelayMethod::GetEstimatedAllocatedAllowance => require_address_value(first, "owner"),
            RelayMethod::GetBalance => {
                require_address_value(first.and_then(|p| p.get("owner")), "owner")
            }
            RelayMethod::GetFills => match first.and_then(|p| p.get("address")) {
                Some(address) => require_address_value(Some(address), "fill owner"),
                None => Ok(()),
            },
            RelayMethod::GetRingMined => match first.and_then(|p| p.get("miner")) {
                Some(miner) => require_address_value(Some(miner), "miner"),
                None => Ok(()),
            },
            _ => Ok(()),
        }
    }
}

impl fmt::Display for RelayMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the full wire name or the part after `loopring_`
impl FromStr for RelayMethod {
    type Err = RelayError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.strip_prefix("loopring_").unwrap_or(s);
        RelayMethod::ALL
            .into_iter()
            .find(|m| m.as_str().trim_start_matches("loopring_") == wanted)
            .ok_or_else(|| RelayError::Validation(format!("unknown relay method: {}", s)))
    }
}

impl<T: Transport> RpcClient<T> {
    /// Invoke a relay method with already-shaped params
    pub fn relay_call(&self, method: RelayMethod, params: Vec<Value>) -> Result<Value> {
        self.call(method.as_str(), params)
    }

    /// `relay_call` after `RelayMethod::validate_params`
    pub fn relay_call_checked(&self, method: RelayMethod, params: Vec<Value>) -> Result<Value> {
        method.validate_params(&params)?;
        self.relay_call(method, params)
    }

    /// Order cutoff timestamp for `address`
    pub fn get_cutoff(&self, address: &str, contract_version: &str, tag: impl IntoTag) -> Result<Value> {
        require_address(address, "account")?;
        // The relay takes no tag, but a bad one is still a caller defect
        tag.into_tag()?;

        self.relay_call(
            RelayMethod::GetCutoff,
            vec![json!(address), json!(contract_version)],
        )
    }

    pub fn submit_loopring_order<O: Serialize>(&self, order: &O) -> Result<Value> {
        self.relay_call(RelayMethod::SubmitOrder, vec![to_param(order)?])
    }

    pub fn get_orders<F: Serialize>(&self, filter: &F) -> Result<Value> {
        self.relay_call(RelayMethod::GetOrders, vec![to_param(filter)?])
    }

    pub fn get_depth<F: Serialize>(&self, filter: &F) -> Result<Value> {
        self.relay_call(RelayMethod::GetDepth, vec![to_param(filter)?])
    }

    pub fn get_ticker<M: Serialize>(&self, market: &M) -> Result<Value> {
        self.relay_call(RelayMethod::GetTicker, vec![to_param(market)?])
    }

    pub fn get_fills(&self, filter: &FillFilter) -> Result<Value> {
        filter.validate()?;
        self.relay_call(RelayMethod::GetFills, vec![to_param(filter)?])
    }

    pub fn get_trend<M: Serialize>(&self, market: &M) -> Result<Value> {
        self.relay_call(RelayMethod::GetTrend, vec![to_param(market)?])
    }

    pub fn get_ring_mined(&self, filter: &RingMinedFilter) -> Result<Value> {
        filter.validate()?;
        self.relay_call(RelayMethod::GetRingMined, vec![to_param(filter)?])
    }

    /// Relay-side token balances and allowances for `owner`
    pub fn get_balances(&self, owner: &str, contract_version: &str) -> Result<Value> {
        require_address(owner, "owner")?;

        self.relay_call(
            RelayMethod::GetBalance,
            vec![json!({ "owner": owner, "contractVersion": contract_version })],
        )
    }

    pub fn get_price_quote(&self, currency: &str) -> Result<Value> {
        self.relay_call(RelayMethod::GetPriceQuote, vec![json!(currency)])
    }

    /// Allowance the relay expects `owner`'s open orders to consume for `token`
    pub fn get_estimated_allocated_allowance(&self, owner: &str, token: &str) -> Result<Value> {
        require_address(owner, "owner")?;

        self.relay_call(
            RelayMethod::GetEstimatedAllocatedAllowance,
            vec![json!(owner), json!(token)],
        )
    }
}

/// Cancel an order on-chain by building and sending the cancel transaction
///
/// # Returns
/// Hash of the submitted cancellation
pub fn cancel_loopring_order<T: Transport, S: Signer>(
    builder: &TransactionBuilder<'_, T, S>,
    raw_tx: RawTransaction,
    private_key: &str,
) -> Result<String> {
    builder.send_transaction(raw_tx, private_key)
}

/// **Private** - a JSON string holding a valid address
fn require_address_value(value: Option<&Value>, role: &str) -> Result<()> {
    match value.and_then(Value::as_str) {
        Some(address) => require_address(address, role),
        None => Err(RelayError::Validation(format!("missing {} address", role))),
    }
}

/// **Private** - serialize a caller-supplied param
fn to_param<P: Serialize + ?Sized>(param: &P) -> Result<Value> {
    serde_json::to_value(param)
        .map_err(|e| RelayError::Validation(format!("cannot encode parameter: {}", e)))
}
