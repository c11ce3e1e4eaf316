//! Signer adapter: key handling and EIP-155 legacy transaction signing.

use super::schema::{RawTransaction, SignedTransaction};
use crate::query::parse_quantity;
use crate::utils::error::{RelayError, Result};
use crate::validator::strip_hex_prefix;
use rlp::RlpStream;
use secp256k1::{All, Message, PublicKey, Secp256k1, SecretKey};
use sha3::{Digest, Keccak256};

/// Produces signed payloads and sender addresses from private keys
///
/// Implementations must be pure with respect to the network.
pub trait Signer {
    /// `0x`-prefixed lowercase address controlled by `private_key`
    fn address(&self, private_key: &str) -> Result<String>;

    /// Sign a transaction whose nonce and chain id are already set
    fn sign(&self, tx: &RawTransaction, private_key: &str) -> Result<SignedTransaction>;
}

/// secp256k1 signer producing EIP-155 replay-protected legacy transactions
#[derive(Debug, Clone)]
pub struct Secp256k1Signer {
    secp: Secp256k1<All>,
}

impl Secp256k1Signer {
    pub fn new() -> Self {
        Self {
            secp: Secp256k1::new(),
        }
    }
}

impl Default for Secp256k1Signer {
    fn default() -> Self {
        Self::new()
    }
}

impl Signer for Secp256k1Signer {
    fn address(&self, private_key: &str) -> Result<String> {
        let secret = parse_private_key(private_key)?;
        let public = PublicKey::from_secret_key(&self.secp, &secret);

        // Hash the public key (excluding the 0x04 prefix)
        let uncompressed = public.serialize_uncompressed();
        let hash = Keccak256::digest(&uncompressed[1..]);

        // Take the last 20 bytes as the address
        Ok(format!("0x{}", hex::encode(&hash[12..])))
    }

    fn sign(&self, tx: &RawTransaction, private_key: &str) -> Result<SignedTransaction> {
        let secret = parse_private_key(private_key)?;
        let fields = LegacyFields::from_raw(tx)?;

        // EIP-155 signing data: six fields, then chainId, 0, 0
        let mut stream = RlpStream::new_list(9);
        fields.append_to(&mut stream);
        stream.append(&fields.chain_id);
        stream.append(&0u8);
        stream.append(&0u8);

        let sighash = Keccak256::digest(&stream.out());
        let message = Message::from_slice(&sighash)
            .map_err(|e| RelayError::Signing(format!("bad message digest: {}", e)))?;

        let signature = self.secp.sign_ecdsa_recoverable(&message, &secret);
        let (recovery_id, compact) = signature.serialize_compact();

        let v = fields
            .chain_id
            .checked_mul(2)
            .and_then(|v| v.checked_add(35 + recovery_id.to_i32() as u64))
            .ok_or_else(|| RelayError::Signing(format!("chainId {} too large", fields.chain_id)))?;

        let mut stream = RlpStream::new_list(9);
        fields.append_to(&mut stream);
        stream.append(&v);
        stream.append(&trim_leading_zeros(&compact[..32]));
        stream.append(&trim_leading_zeros(&compact[32..]));

        Ok(SignedTransaction::new(format!(
            "0x{}",
            hex::encode(stream.out())
        )))
    }
}

/// Byte-level transaction fields in RLP order
struct LegacyFields {
    nonce: Vec<u8>,
    gas_price: Vec<u8>,
    gas_limit: Vec<u8>,
    to: Vec<u8>,
    value: Vec<u8>,
    data: Vec<u8>,
    chain_id: u64,
}

impl LegacyFields {
    fn from_raw(tx: &RawTransaction) -> Result<Self> {
        let nonce = tx
            .nonce
            .as_deref()
            .ok_or_else(|| RelayError::Signing("nonce is not set".to_string()))?;
        let chain_id = tx
            .chain_id
            .ok_or_else(|| RelayError::Signing("chainId is not set".to_string()))?;

        Ok(Self {
            nonce: quantity_bytes("nonce", nonce)?,
            gas_price: quantity_bytes("gasPrice", &tx.gas_price)?,
            gas_limit: quantity_bytes("gasLimit", &tx.gas_limit)?,
            to: hex_bytes("to", &tx.to)?,
            value: quantity_bytes("value", &tx.value)?,
            data: hex_bytes("data", &tx.data)?,
            chain_id,
        })
    }

    fn append_to(&self, stream: &mut RlpStream) {
        stream.append(&self.nonce);
        stream.append(&self.gas_price);
        stream.append(&self.gas_limit);
        stream.append(&self.to);
        stream.append(&self.value);
        stream.append(&self.data);
    }
}

/// Parse a 32-byte hex private key (optional `0x` prefix)
///
/// **Private** - the key is never echoed back in the error
fn parse_private_key(private_key: &str) -> Result<SecretKey> {
    let bytes = hex::decode(strip_hex_prefix(private_key))
        .map_err(|_| RelayError::Validation("private key is not valid hex".to_string()))?;

    if bytes.len() != 32 {
        return Err(RelayError::Validation(format!(
            "private key must be 32 bytes, got {}",
            bytes.len()
        )));
    }

    SecretKey::from_slice(&bytes)
        .map_err(|_| RelayError::Validation("private key is out of range".to_string()))
}

/// Minimal big-endian bytes of a hex quantity (zero encodes as empty)
fn quantity_bytes(field: &str, value: &str) -> Result<Vec<u8>> {
    let quantity = parse_quantity(value)
        .map_err(|_| RelayError::Signing(format!("invalid {}: {}", field, value)))?;

    if quantity.bits() == 0 {
        Ok(Vec::new())
    } else {
        Ok(quantity.to_bytes_be())
    }
}

fn hex_bytes(field: &str, value: &str) -> Result<Vec<u8>> {
    hex::decode(strip_hex_prefix(value))
        .map_err(|_| RelayError::Signing(format!("invalid {}: {}", field, value)))
}

fn trim_leading_zeros(bytes: &[u8]) -> Vec<u8> {
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    bytes[start..].to_vec()
}
