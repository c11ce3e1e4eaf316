//! Minimal ABI call data for ERC20-style reads.

use crate::validator::strip_hex_prefix;
use sha3::{Digest, Keccak256};

/// Bytes per ABI word
const WORD_BYTES: usize = 32;

/// First four bytes of `keccak256(signature)`
pub fn function_selector(signature: &str) -> [u8; 4] {
    let hash = Keccak256::digest(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash[..4]);
    selector
}

/// Call data for `balanceOf(address)`
///
/// `owner` must already be a valid address.
pub fn encode_balance_of(owner: &str) -> String {
    encode_call("balanceOf(address)", &[owner])
}

/// Call data for `allowance(address,address)`
pub fn encode_allowance(owner: &str, spender: &str) -> String {
    encode_call("allowance(address,address)", &[owner, spender])
}

/// Selector followed by each address left-padded to a 32-byte word
fn encode_call(signature: &str, addresses: &[&str]) -> String {
    let mut data = format!("0x{}", hex::encode(function_selector(signature)));
    for address in addresses {
        let digits = strip_hex_prefix(address).to_lowercase();
        data.push_str(&"0".repeat(WORD_BYTES * 2 - digits.len()));
        data.push_str(&digits);
    }
    data
}
