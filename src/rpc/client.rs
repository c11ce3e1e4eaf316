//! JSON-RPC client shared by the query, submission and relay layers.

use super::transport::{HttpTransport, Transport};
use super::types::RpcRequest;
use crate::utils::error::{RelayError, Result};
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// RPC client bound to one transport
///
/// Holds no per-call state: every call builds its own `RpcRequest`.
#[derive(Debug, Clone)]
pub struct RpcClient<T = HttpTransport> {
    transport: T,
}

impl RpcClient<HttpTransport> {
    /// Create a client for an HTTP endpoint
    pub fn connect(rpc_url: impl Into<String>) -> Result<Self> {
        Ok(Self::new(HttpTransport::new(rpc_url)?))
    }
}

impl<T: Transport> RpcClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Issue a call and hand the `result` to a decoder
    ///
    /// **Public** - the one primitive every typed wrapper is built on
    ///
    /// # Arguments
    /// * `method` - RPC method name
    /// * `params` - Positional parameters
    /// * `decode` - Converts the raw `result` into the caller's type
    ///
    /// # Errors
    /// * `RelayError::Network` - transport-level failure
    /// * `RelayError::Rpc` - response carried an `error` field
    /// * whatever `decode` returns
    pub fn request<R, F>(&self, method: &str, params: Vec<Value>, decode: F) -> Result<R>
    where
        F: FnOnce(Value) -> Result<R>,
    {
        let request = RpcRequest::new(method, params);
        debug!("RPC request {} id={}", request.method, request.id);

        let response = self.transport.send(&request)?;

        if let Some(error) = response.rpc_error() {
            return Err(RelayError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        decode(response.result)
    }

    /// Issue a call and return the raw `result`
    pub fn call(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        self.request(method, params, Ok)
    }

    /// Issue a call and deserialize the `result` into `R`
    pub fn call_as<R: DeserializeOwned>(&self, method: &str, params: Vec<Value>) -> Result<R> {
        self.request(method, params, |result| {
            serde_json::from_value(result).map_err(|e| {
                RelayError::InvalidResponse(format!("unexpected result for {}: {}", method, e))
            })
        })
    }
}

/// Decode a `result` that must be a JSON string
///
/// **Public** - used by the hex-returning wrappers
pub fn expect_string(result: Value) -> Result<String> {
    match result {
        Value::String(s) => Ok(s),
        other => Err(RelayError::InvalidResponse(format!(
            "expected a string result, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expect_string() {
        assert_eq!(expect_string(Value::from("0x1")).unwrap(), "0x1");
        assert!(matches!(
            expect_string(Value::Null),
            Err(RelayError::InvalidResponse(_))
        ));
    }
}
