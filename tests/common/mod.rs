//! In-memory transport for integration tests.

#![allow(dead_code)]

use loopring_relay_client::rpc::{RpcClient, RpcRequest, RpcResponse, Transport};
use loopring_relay_client::{RelayError, Result};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

pub const SENDER_KEY: &str = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";
pub const SENDER: &str = "0x2c7536e3605d9c16a7a3d7b1898e529396a65c23";
pub const RECIPIENT: &str = "0x3535353535353535353535353535353535353535";
pub const TOKEN: &str = "0xef68e7c694f40c8202821edf525de3782458639f";

/// Answers from a per-method table and records every request
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<String, Value>>,
    requests: Mutex<Vec<RpcRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to `method` with `{"result": result}`
    pub fn with_result(self, method: &str, result: Value) -> Self {
        self.with_body(method, json!({ "jsonrpc": "2.0", "result": result }))
    }

    /// Reply to `method` with `{"error": {"message": message}}`
    pub fn with_error(self, method: &str, message: &str) -> Self {
        self.with_body(method, json!({ "jsonrpc": "2.0", "error": { "message": message } }))
    }

    pub fn with_body(self, method: &str, body: Value) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(method.to_string(), body);
        self
    }

    pub fn requests(&self) -> Vec<RpcRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn methods(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.method).collect()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &RpcRequest) -> Result<RpcResponse> {
        self.requests.lock().unwrap().push(request.clone());

        let body = self
            .responses
            .lock()
            .unwrap()
            .get(&request.method)
            .cloned()
            .ok_or_else(|| {
                RelayError::InvalidResponse(format!("no mock response for {}", request.method))
            })?;

        serde_json::from_value(body).map_err(|e| RelayError::InvalidResponse(e.to_string()))
    }
}

pub fn client(transport: &MockTransport) -> RpcClient<&MockTransport> {
    RpcClient::new(transport)
}
