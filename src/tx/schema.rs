//! Transaction data model.
//!
//! `RawTransaction` is what callers hand in, `BuiltTransaction` is what a
//! successful builder run hands back.

use crate::utils::config::MAX_QUANTITY_HEX_DIGITS;
use crate::utils::error::{RelayError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Hex digits in an ABI function selector
const SELECTOR_HEX_DIGITS: usize = 8;

/// Hex digits in one ABI word
const WORD_HEX_DIGITS: usize = 64;

/// Hex digits in an address
const ADDRESS_HEX_DIGITS: usize = 40;

/// Unsigned legacy transaction as supplied by the caller
///
/// All numeric fields are `0x`-prefixed hex strings. `nonce` and `chain_id`
/// are filled in by the builder when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    pub gas_price: String,
    pub gas_limit: String,
    pub to: String,
    pub value: String,
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
}

impl RawTransaction {
    /// Decode and shape-check a JSON transaction
    ///
    /// # Errors
    /// * `RelayError::Schema` - missing field, wrong JSON type or bad format
    pub fn from_value(value: Value) -> Result<Self> {
        let tx: RawTransaction = serde_json::from_value(value)
            .map_err(|e| RelayError::Schema(e.to_string()))?;
        tx.validate()?;
        Ok(tx)
    }

    /// Check every field against its expected format
    ///
    /// Quantities are `0x` plus 1 to 64 hex digits, `to` is a 20-byte
    /// address, `data` is either `0x` or a selector followed by whole
    /// 32-byte words, and `chainId` is positive.
    pub fn validate(&self) -> Result<()> {
        if let Some(nonce) = &self.nonce {
            check_quantity("nonce", nonce)?;
        }
        check_quantity("gasPrice", &self.gas_price)?;
        check_quantity("gasLimit", &self.gas_limit)?;
        check_quantity("value", &self.value)?;

        match prefixed_digits(&self.to) {
            Some(digits) if digits.len() == ADDRESS_HEX_DIGITS => {}
            _ => return Err(schema_error("to", &self.to)),
        }

        match prefixed_digits(&self.data) {
            Some(digits) if is_call_data(digits) => {}
            _ => return Err(schema_error("data", &self.data)),
        }

        if self.chain_id == Some(0) {
            return Err(RelayError::Schema("chainId must be at least 1".to_string()));
        }

        Ok(())
    }
}

/// Hex-encoded signed transaction, ready for `eth_sendRawTransaction`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SignedTransaction(String);

impl SignedTransaction {
    pub fn new(payload: impl Into<String>) -> Self {
        Self(payload.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SignedTransaction {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SignedTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Finalized transaction paired with its signature
///
/// Only the builder creates these, and only once both halves exist: `tx`
/// always carries the nonce and chain id that were signed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuiltTransaction {
    tx: RawTransaction,
    signed_tx: SignedTransaction,
}

impl BuiltTransaction {
    pub(crate) fn new(tx: RawTransaction, signed_tx: SignedTransaction) -> Self {
        Self { tx, signed_tx }
    }

    pub fn tx(&self) -> &RawTransaction {
        &self.tx
    }

    pub fn signed_tx(&self) -> &SignedTransaction {
        &self.signed_tx
    }

    pub fn into_parts(self) -> (RawTransaction, SignedTransaction) {
        (self.tx, self.signed_tx)
    }
}

/// Digits after a mandatory lowercase `0x`, if they are all hex
fn prefixed_digits(s: &str) -> Option<&str> {
    let digits = s.strip_prefix("0x")?;
    digits
        .chars()
        .all(|c| c.is_ascii_hexdigit())
        .then_some(digits)
}

fn check_quantity(field: &str, value: &str) -> Result<()> {
    match prefixed_digits(value) {
        Some(digits) if !digits.is_empty() && digits.len() <= MAX_QUANTITY_HEX_DIGITS => Ok(()),
        _ => Err(schema_error(field, value)),
    }
}

fn is_call_data(digits: &str) -> bool {
    digits.is_empty()
        || (digits.len() >= SELECTOR_HEX_DIGITS
            && (digits.len() - SELECTOR_HEX_DIGITS) % WORD_HEX_DIGITS == 0)
}

fn schema_error(field: &str, value: &str) -> RelayError {
    RelayError::Schema(format!("invalid {}: {:?}", field, value))
}
