//! Hex quantity parsing for wei amounts.

use crate::utils::error::{RelayError, Result};
use crate::validator::strip_hex_prefix;
use num_bigint::BigUint;

/// Map a bare `0x` to `0x0`
///
/// Nodes may answer `0x` for a zero balance or an empty call result; the
/// big-number parser rejects that, so it is canonicalized first.
pub fn canonicalize_hex(value: &str) -> &str {
    if value == "0x" {
        "0x0"
    } else {
        value
    }
}

/// Parse a `0x`-prefixed hex quantity into an arbitrary-precision integer
///
/// # Errors
/// * `RelayError::InvalidResponse` - not a hex number
pub fn parse_quantity(value: &str) -> Result<BigUint> {
    let canonical = canonicalize_hex(value);
    let digits = strip_hex_prefix(canonical);

    if digits.is_empty() {
        return Err(RelayError::InvalidResponse(format!(
            "empty hex quantity: {:?}",
            value
        )));
    }

    // parse_bytes alone would let a sign or `_` separators through
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(RelayError::InvalidResponse(format!("invalid hex quantity: {}", value)));
    }

    BigUint::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| RelayError::InvalidResponse(format!("invalid hex quantity: {}", value)))
}

/// Format an integer as a `0x`-prefixed hex quantity
pub fn to_quantity(value: &BigUint) -> String {
    format!("0x{}", value.to_str_radix(16))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_prefix_is_zero() {
        assert_eq!(canonicalize_hex("0x"), "0x0");
        assert_eq!(parse_quantity("0x").unwrap(), BigUint::default());
    }

    #[test]
    fn test_parse_beyond_u128() {
        let value = parse_quantity("0xffffffffffffffffffffffffffffffffff").unwrap();
        assert_eq!(value.bits(), 136);
        assert_eq!(to_quantity(&value), "0xffffffffffffffffffffffffffffffffff");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_quantity("0xzz").is_err());
        assert!(parse_quantity("").is_err());
    }

    #[test]
    fn test_parse_rejects_sign_and_separators() {
        assert!(matches!(parse_quantity("0x+1_0"), Err(RelayError::InvalidResponse(_))));
        assert!(parse_quantity("0x1_0").is_err());
        assert!(parse_quantity("0x+10").is_err());
    }

    #[test]
    fn test_to_quantity_zero() {
        assert_eq!(to_quantity(&BigUint::default()), "0x0");
    }
}
