//! Transport seam between the RPC client and the network.
//!
//! The client never talks HTTP directly; it hands a finished request to a
//! `Transport`. Tests substitute an in-memory implementation.

use super::types::{RpcRequest, RpcResponse};
use crate::utils::error::{RelayError, Result};
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::sync::Arc;
use std::time::Duration;

/// Delivers one JSON-RPC request and returns the decoded response body
pub trait Transport {
    fn send(&self, request: &RpcRequest) -> Result<RpcResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &RpcRequest) -> Result<RpcResponse> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: &RpcRequest) -> Result<RpcResponse> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: &RpcRequest) -> Result<RpcResponse> {
        (**self).send(request)
    }
}

/// HTTP POST transport for a single endpoint
///
/// Endpoint and client settings are fixed at construction.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    rpc_url: String,
}

impl HttpTransport {
    /// Create a transport with reqwest's default client settings
    pub fn new(rpc_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build().map_err(RelayError::Network)?;

        Ok(Self {
            client,
            rpc_url: rpc_url.into(),
        })
    }

    /// Create a transport with an explicit request timeout
    pub fn with_timeout(rpc_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RelayError::Network)?;

        Ok(Self {
            client,
            rpc_url: rpc_url.into(),
        })
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &RpcRequest) -> Result<RpcResponse> {
        debug!("POST {} ({})", self.rpc_url, request.method);

        let response = self
            .client
            .post(&self.rpc_url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()?;

        // Check HTTP status
        if !response.status().is_success() {
            return Err(RelayError::InvalidResponse(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().unwrap_or_default()
            )));
        }

        let body = response.text()?;
        serde_json::from_str(&body)
            .map_err(|e| RelayError::InvalidResponse(format!("malformed JSON-RPC body: {}", e)))
    }
}
