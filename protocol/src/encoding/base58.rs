//! # Base58 Integer Encoding
//!
//! Encodes a hex string, read as one big-endian unsigned integer, into
//! base58 text. The alphabet is the usual Bitcoin one (no 0, O, I, l).
//!
//! **This is not Base58Check, and it is not the `bs58` crate's encoding.**
//! Two properties are load-bearing and must not be "improved":
//!
//! - Leading `0x00` bytes vanish. The input is converted to an integer
//!   before encoding, so `00ff` and `ff` produce the same text. Canonical
//!   Bitcoin base58 would render each leading zero byte as a '1'; this
//!   encoder never emits padding. Every SIN in circulation was produced
//!   under this rule.
//! - The integer zero encodes to the empty string, for the same reason.
//!
//! The 26-byte values this crate feeds in exceed u128, so the arithmetic
//! runs on `BigUint`. The divide-by-58 loop is iterative and produces the
//! most significant digit first.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::config::BASE58_ALPHABET;
use thiserror::Error;

/// Errors from the encoding stage.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The input string is not parseable as hexadecimal. Inside the SIN
    /// pipeline this means an internal construction bug, not user input.
    #[error("malformed hex input: {0}")]
    MalformedHex(String),
}

/// Base58-encode a hex string interpreted as a big-endian unsigned integer.
///
/// Odd-length hex is accepted (the value is an integer, not a byte
/// string). Returns the empty string for zero.
///
/// # Errors
///
/// [`EncodeError::MalformedHex`] if `hexdata` contains non-hex characters
/// or is empty.
///
/// # Example
///
/// ```
/// use beerpay_protocol::encoding::base58;
///
/// assert_eq!(base58::encode("0123456789ABCDEF").unwrap(), "C3CPq7c8PY");
/// ```
pub fn encode(hexdata: &str) -> Result<String, EncodeError> {
    let mut value = BigUint::parse_bytes(hexdata.as_bytes(), 16)
        .ok_or_else(|| EncodeError::MalformedHex(hexdata.to_string()))?;

    let alphabet = BASE58_ALPHABET.as_bytes();
    let mut digits = Vec::new();
    while !value.is_zero() {
        let remainder = (&value % 58u32)
            .to_usize()
            .expect("remainder of division by 58 always fits in usize");
        digits.push(alphabet[remainder]);
        value = &value / 58u32;
    }
    digits.reverse();

    Ok(String::from_utf8(digits).expect("base58 alphabet is pure ASCII"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        // Note the first vector is odd-length hex: 15 nibbles. The encoder
        // must treat the input as an integer, not as bytes.
        assert_eq!(encode("0123456789ABCDE").unwrap(), "h1iJWQwqX");
        assert_eq!(encode("0123456789ABCDEF").unwrap(), "C3CPq7c8PY");
    }

    #[test]
    fn test_lowercase_hex_accepted() {
        assert_eq!(encode("0123456789abcdef").unwrap(), "C3CPq7c8PY");
    }

    #[test]
    fn test_zero_encodes_to_empty_string() {
        assert_eq!(encode("0").unwrap(), "");
        assert_eq!(encode("00000000").unwrap(), "");
    }

    #[test]
    fn test_leading_zero_bytes_are_dropped() {
        // No '1' padding: a leading 0x00 byte changes nothing.
        assert_eq!(encode("00ff").unwrap(), encode("ff").unwrap());
        assert_eq!(encode("0000000001").unwrap(), "2");
    }

    #[test]
    fn test_single_digit_values() {
        assert_eq!(encode("1").unwrap(), "2");
        assert_eq!(encode("39").unwrap(), "z"); // 57, the last alphabet symbol
        assert_eq!(encode("3a").unwrap(), "21"); // 58 rolls over to two digits
    }

    #[test]
    fn test_length_is_non_decreasing_across_powers_of_58() {
        // 58^k is the smallest (k+1)-digit value; encoding length must
        // never shrink as the integer grows through those boundaries.
        let mut power = BigUint::from(1u32);
        let mut previous_len = 0;
        for _ in 0..20 {
            let encoded = encode(&power.to_str_radix(16)).unwrap();
            assert!(encoded.len() >= previous_len);
            previous_len = encoded.len();
            power *= 58u32;
        }
    }

    #[test]
    fn test_26_byte_value_encodes() {
        // The pipeline's real input size: payload + checksum, 52 hex chars.
        let encoded = encode(&"ff".repeat(26)).unwrap();
        assert_eq!(encoded.len(), 36);
        assert!(encoded.chars().all(|c| BASE58_ALPHABET.contains(c)));
    }

    #[test]
    fn test_malformed_hex_rejected() {
        assert!(matches!(encode("xyz"), Err(EncodeError::MalformedHex(_))));
        assert!(encode("").is_err());
        assert!(encode("12 34").is_err());
    }
}
