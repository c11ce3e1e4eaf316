//! Types for JSON-RPC 2.0 communication with the node and relay.

use crate::utils::config::{JSONRPC_VERSION, REQUEST_ID_BYTES};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 request structure
///
/// Built fresh for every call and never mutated afterwards, so one client
/// can be used from several threads at once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub id: String,
    pub method: String,
    pub params: Vec<Value>,
}

impl RpcRequest {
    /// Create a request with a fresh random id
    ///
    /// # Arguments
    /// * `method` - RPC method name (e.g. `eth_getBalance`)
    /// * `params` - Positional parameters
    pub fn new(method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id: random_id(),
            method: method.into(),
            params,
        }
    }
}

/// JSON-RPC 2.0 response structure
///
/// Either `result` or `error` is meaningful; an absent `result` decodes as
/// `Value::Null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub result: Value,
    /// Kept untyped: nodes and relays do not all send `{code, message}`
    #[serde(default)]
    pub error: Option<Value>,
}

impl RpcResponse {
    /// The `error` member, if present and not `null`
    pub fn rpc_error(&self) -> Option<JsonRpcError> {
        self.error.as_ref().map(JsonRpcError::from_value)
    }
}

/// JSON-RPC error object, normalized from whatever shape the server sent
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRpcError {
    pub code: Option<i64>,
    pub message: String,
    pub data: Option<Value>,
}

impl JsonRpcError {
    /// Take `message` when it is a string, otherwise the error rendered as
    /// JSON; take `code` when it is an integer
    pub fn from_value(error: &Value) -> Self {
        let message = match error {
            Value::String(s) => s.clone(),
            other => match other.get("message") {
                Some(Value::String(s)) => s.clone(),
                _ => other.to_string(),
            },
        };

        Self {
            code: error.get("code").and_then(Value::as_i64),
            message,
            data: error.get("data").cloned(),
        }
    }
}

/// 16 random bytes, hex encoded
fn random_id() -> String {
    let mut bytes = [0u8; REQUEST_ID_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
