//! Balance, allowance and nonce queries.

use super::abi::{encode_allowance, encode_balance_of};
use super::quantity::{canonicalize_hex, parse_quantity};
use crate::rpc::client::expect_string;
use crate::rpc::{RpcClient, Transport};
use crate::utils::error::{RelayError, Result};
use crate::validator::{is_valid_hex, require_address, IntoTag};
use num_bigint::BigUint;
use serde::Serialize;
use serde_json::{json, Value};

/// Target and payload of a read-only `eth_call`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallRequest {
    pub to: String,
    pub data: String,
}

impl CallRequest {
    pub fn new(to: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            data: data.into(),
        }
    }
}

impl<T: Transport> RpcClient<T> {
    /// Native-currency balance of `address` in wei
    ///
    /// # Arguments
    /// * `address` - Account address
    /// * `tag` - Confirmation tag (`None` means `latest`)
    ///
    /// # Errors
    /// * `RelayError::Validation` - bad address or tag, no request is sent
    /// * `RelayError::Rpc` / `RelayError::Network` - from the call itself
    pub fn get_account_balance(&self, address: &str, tag: impl IntoTag) -> Result<BigUint> {
        require_address(address, "account")?;
        let tag = tag.into_tag()?;

        self.request(
            "eth_getBalance",
            vec![json!(address), json!(tag)],
            decode_quantity,
        )
    }

    /// ERC20 `balanceOf(owner)` on `token`
    pub fn get_token_balance(
        &self,
        token: &str,
        owner: &str,
        tag: impl IntoTag,
    ) -> Result<BigUint> {
        require_address(owner, "owner")?;
        require_address(token, "token contract")?;
        let tag = tag.into_tag()?;

        let call = CallRequest::new(token, encode_balance_of(owner));
        parse_quantity(&self.eth_call(&call, tag.as_str())?)
    }

    /// ERC20 `allowance(owner, spender)` on `token`
    pub fn get_token_allowance(
        &self,
        token: &str,
        owner: &str,
        spender: &str,
        tag: impl IntoTag,
    ) -> Result<BigUint> {
        require_address(owner, "owner")?;
        require_address(spender, "spender")?;
        require_address(token, "token contract")?;
        let tag = tag.into_tag()?;

        let call = CallRequest::new(token, encode_allowance(owner, spender));
        parse_quantity(&self.eth_call(&call, tag.as_str())?)
    }

    /// Transaction count of `address`, returned as the node's hex string
    ///
    /// Use `pending` when the result becomes the nonce of a transaction
    /// about to be sent, so transactions still in the pool are counted.
    pub fn get_transaction_count(&self, address: &str, tag: impl IntoTag) -> Result<String> {
        require_address(address, "account")?;
        let tag = tag.into_tag()?;

        self.request(
            "eth_getTransactionCount",
            vec![json!(address), json!(tag)],
            expect_string,
        )
    }

    /// Raw `eth_call`, returning the hex return data
    ///
    /// A bare `0x` result comes back as `0x0`.
    pub fn call_contract(&self, call: &CallRequest, tag: impl IntoTag) -> Result<String> {
        require_address(&call.to, "call target")?;
        if call.data != "0x" && !(call.data.starts_with("0x") && is_valid_hex(&call.data)) {
            return Err(RelayError::Validation(format!(
                "invalid call data: {}",
                call.data
            )));
        }
        let tag = tag.into_tag()?;

        self.eth_call(call, tag.as_str())
    }

    /// **Private** - shared by the token queries after validation
    fn eth_call(&self, call: &CallRequest, tag: &str) -> Result<String> {
        self.request("eth_call", vec![json!(call), json!(tag)], |result| {
            let data = expect_string(result)?;
            Ok(canonicalize_hex(&data).to_string())
        })
    }
}

/// **Private** - string result to wei amount
fn decode_quantity(result: Value) -> Result<BigUint> {
    parse_quantity(&expect_string(result)?)
}
