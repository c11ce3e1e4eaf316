//! Address and hex-string format predicates.

use crate::utils::error::{RelayError, Result};

/// Hex digits in a 20-byte account address
const ADDRESS_HEX_DIGITS: usize = 40;

/// Strip an optional `0x` / `0X` prefix
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Check whether `s` is a 20-byte hex address
///
/// The `0x` prefix is optional and digits are matched case-insensitively.
/// No checksum validation is performed.
pub fn is_valid_address(s: &str) -> bool {
    let digits = strip_hex_prefix(s);
    digits.len() == ADDRESS_HEX_DIGITS && is_hex_digits(digits)
}

/// Check whether `s` is a non-empty hex string of any length
///
/// The `0x` prefix is optional, as for addresses.
pub fn is_valid_hex(s: &str) -> bool {
    let digits = strip_hex_prefix(s);
    !digits.is_empty() && is_hex_digits(digits)
}

/// Validate an address, naming the offending role in the error
///
/// **Public** - shared by the query, relay and builder layers
pub fn require_address(address: &str, role: &str) -> Result<()> {
    if is_valid_address(address) {
        Ok(())
    } else {
        Err(RelayError::Validation(format!(
            "invalid {} address: {}",
            role, address
        )))
    }
}

fn is_hex_digits(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_hexdigit())
}
