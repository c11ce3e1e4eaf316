//! Transaction builder.
//!
//! `generate_tx` runs, in order and stopping at the first failure:
//! 1. Shape validation
//! 2. Gas limit bound check
//! 3. Balance sufficiency check
//! 4. Nonce resolution
//! 5. Chain id default
//! 6. Signing

use super::schema::{BuiltTransaction, RawTransaction};
use super::signer::{Secp256k1Signer, Signer};
use crate::query::{parse_quantity, to_quantity};
use crate::rpc::{RpcClient, Transport};
use crate::utils::config::{DEFAULT_CHAIN_ID, MAX_GAS_LIMIT, MIN_GAS_LIMIT};
use crate::utils::error::{RelayError, Result};
use crate::validator::ConfirmationTag;
use log::{debug, info};
use num_bigint::BigUint;
use serde_json::Value;

/// Builds and signs transactions against one RPC client
///
/// # Concurrency
/// Nonce resolution is not serialized. Two builds for the same sender that
/// run concurrently can read the same `pending` nonce and produce
/// conflicting transactions. Callers sending several transactions from one
/// address at once must assign nonces themselves (set `nonce` on each
/// `RawTransaction`) or queue builds per address.
#[derive(Debug)]
pub struct TransactionBuilder<'a, T, S = Secp256k1Signer> {
    client: &'a RpcClient<T>,
    signer: S,
}

impl<'a, T: Transport> TransactionBuilder<'a, T> {
    /// Builder using the secp256k1 signer
    pub fn new(client: &'a RpcClient<T>) -> Self {
        Self::with_signer(client, Secp256k1Signer::new())
    }
}

impl<'a, T: Transport, S: Signer> TransactionBuilder<'a, T, S> {
    pub fn with_signer(client: &'a RpcClient<T>, signer: S) -> Self {
        Self { client, signer }
    }

    pub fn signer(&self) -> &S {
        &self.signer
    }

    /// Validate, fund-check, complete and sign a transaction
    ///
    /// **Public** - main entry point of the builder
    ///
    /// # Arguments
    /// * `raw_tx` - Caller-supplied transaction; `nonce` and `chain_id` may be absent
    /// * `private_key` - 32-byte hex key of the sender
    ///
    /// # Returns
    /// The completed transaction together with its signed payload
    ///
    /// # Errors
    /// * `RelayError::Schema` - malformed transaction fields
    /// * `RelayError::GasLimit` - gas limit outside [21000, 5000000]
    /// * `RelayError::Validation` - unusable private key
    /// * `RelayError::InsufficientBalance` - balance below `value + gasLimit * gasPrice`
    /// * `RelayError::Rpc` / `RelayError::Network` - balance or nonce lookup failed
    pub fn generate_tx(&self, raw_tx: RawTransaction, private_key: &str) -> Result<BuiltTransaction> {
        let mut tx = raw_tx;

        debug!("Step 1/6: Validating transaction fields...");
        tx.validate()?;

        debug!("Step 2/6: Checking gas limit...");
        let gas_limit = parse_field("gasLimit", &tx.gas_limit)?;
        check_gas_limit(&gas_limit)?;

        debug!("Step 3/6: Checking sender balance...");
        let sender = self.signer.address(private_key)?;
        let gas_price = parse_field("gasPrice", &tx.gas_price)?;
        let value = parse_field("value", &tx.value)?;
        let needed = required_balance(&value, &gas_limit, &gas_price);

        let balance = self
            .client
            .get_account_balance(&sender, ConfirmationTag::Latest)?;

        if balance < needed {
            return Err(RelayError::InsufficientBalance {
                balance: balance.to_string(),
                needed: needed.to_string(),
            });
        }

        if tx.nonce.is_none() {
            debug!("Step 4/6: Resolving pending nonce for {}...", sender);
            let nonce = self
                .client
                .get_transaction_count(&sender, ConfirmationTag::Pending)?;
            // Re-emit in canonical form so the filled field passes validation
            tx.nonce = Some(to_quantity(&parse_quantity(&nonce)?));
        } else {
            debug!("Step 4/6: Using caller-supplied nonce");
        }

        debug!("Step 5/6: Applying chain id...");
        let chain_id = *tx.chain_id.get_or_insert(DEFAULT_CHAIN_ID);

        debug!("Step 6/6: Signing...");
        let signed = self.signer.sign(&tx, private_key)?;

        info!(
            "Built transaction from {} to {} (nonce {}, chain {})",
            sender,
            tx.to,
            tx.nonce.as_deref().unwrap_or_default(),
            chain_id
        );

        Ok(BuiltTransaction::new(tx, signed))
    }

    /// `generate_tx` for a JSON transaction object
    pub fn generate_tx_from_value(&self, raw_tx: Value, private_key: &str) -> Result<BuiltTransaction> {
        self.generate_tx(RawTransaction::from_value(raw_tx)?, private_key)
    }

    /// Build, sign and submit, returning the transaction hash
    pub fn send_transaction(&self, raw_tx: RawTransaction, private_key: &str) -> Result<String> {
        let built = self.generate_tx(raw_tx, private_key)?;
        self.client.send_signed_tx(built.signed_tx())
    }
}

/// Reject gas limits outside [MIN_GAS_LIMIT, MAX_GAS_LIMIT]
///
/// **Public** - exposed so callers can pre-check before building
pub fn check_gas_limit(gas_limit: &BigUint) -> Result<()> {
    if *gas_limit < BigUint::from(MIN_GAS_LIMIT) {
        return Err(RelayError::GasLimit(format!(
            "gasLimit {} is below the minimum of {}",
            gas_limit, MIN_GAS_LIMIT
        )));
    }

    if *gas_limit > BigUint::from(MAX_GAS_LIMIT) {
        return Err(RelayError::GasLimit(format!(
            "gasLimit {} exceeds the maximum of {}",
            gas_limit, MAX_GAS_LIMIT
        )));
    }

    Ok(())
}

/// Wei needed to send a transaction: `value + gasLimit * gasPrice`
pub fn required_balance(value: &BigUint, gas_limit: &BigUint, gas_price: &BigUint) -> BigUint {
    value + gas_limit * gas_price
}

/// **Private** - fields are already shape-checked, so failure is a schema defect
fn parse_field(field: &str, value: &str) -> Result<BigUint> {
    parse_quantity(value).map_err(|_| RelayError::Schema(format!("invalid {}: {}", field, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gas_limit_edges() {
        assert!(check_gas_limit(&BigUint::from(21_000u64)).is_ok());
        assert!(check_gas_limit(&BigUint::from(5_000_000u64)).is_ok());

        let low = check_gas_limit(&BigUint::from(20_999u64)).unwrap_err();
        assert!(low.to_string().contains("below the minimum"));

        let high = check_gas_limit(&BigUint::from(5_000_001u64)).unwrap_err();
        assert!(high.to_string().contains("exceeds the maximum"));
    }

    #[test]
    fn test_required_balance_exceeds_u128() {
        let value = BigUint::from(u128::MAX);
        let needed = required_balance(&value, &BigUint::from(21_000u32), &BigUint::from(u128::MAX));
        assert_eq!(needed, BigUint::from(u128::MAX) * BigUint::from(21_001u32));
    }
}
