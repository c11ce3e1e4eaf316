//! JSON-RPC client for communicating with the node and relay.

pub mod client;
pub mod transport;
pub mod types;

// Re-export main types
pub use client::RpcClient;
pub use transport::{HttpTransport, Transport};
pub use types::{JsonRpcError, RpcRequest, RpcResponse};
