//! Submission of signed transactions.

use crate::rpc::client::expect_string;
use crate::rpc::{RpcClient, Transport};
use crate::utils::error::{RelayError, Result};
use crate::validator::is_valid_hex;
use log::info;
use serde_json::json;

impl<T: Transport> RpcClient<T> {
    /// Broadcast a signed payload via `eth_sendRawTransaction`
    ///
    /// # Returns
    /// The transaction hash assigned by the node
    ///
    /// # Errors
    /// * `RelayError::Validation` - payload is not `0x`-prefixed hex, nothing is sent
    /// * `RelayError::Rpc` - node rejected it (nonce too low, underpriced, ...)
    pub fn send_signed_tx(&self, signed_tx: impl AsRef<str>) -> Result<String> {
        let payload = signed_tx.as_ref();
        if !payload.starts_with("0x") || !is_valid_hex(payload) {
            return Err(RelayError::Validation(
                "signed transaction must be 0x-prefixed hex".to_string(),
            ));
        }

        let hash = self.request("eth_sendRawTransaction", vec![json!(payload)], expect_string)?;
        info!("Transaction submitted: {}", hash);
        Ok(hash)
    }
}
