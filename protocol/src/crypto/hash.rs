//! # Hashing
//!
//! The two hash constructions the SIN pipeline needs:
//!
//! - **Hash160**: `RIPEMD-160(SHA-256(data))`, the classic Bitcoin
//!   key-to-address digest. Turns a 33-byte compressed key into the
//!   20-byte identity digest.
//! - **double SHA-256**: `SHA-256(SHA-256(data))`, used for the 4-byte
//!   payload checksum.
//!
//! Both are pure functions over byte slices. The implementations come from
//! the RustCrypto `sha2` and `ripemd` crates and are compiled in, so
//! there is no "hash backend unavailable" failure mode to handle at
//! runtime.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::config::DIGEST_LENGTH;

/// Compute the SHA-256 hash of the input data.
///
/// Returns a 32-byte digest as a `Vec<u8>`. Callers that chain hashes
/// (see [`double_sha256`]) pass the result straight back in as `&[u8]`,
/// so the heap allocation is the convenient shape here.
///
/// # Example
///
/// ```
/// use beerpay_protocol::crypto::sha256;
///
/// let hash = sha256(b"beerpay");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// Compute the double-SHA-256 hash: `SHA-256(SHA-256(data))`.
///
/// Bitcoin's favorite construction. The SIN checksum is the first four
/// bytes of this digest over the payload.
///
/// # Example
///
/// ```
/// use beerpay_protocol::crypto::double_sha256;
///
/// let digest = double_sha256(b"payload bytes");
/// assert_eq!(digest.len(), 32);
/// ```
pub fn double_sha256(data: &[u8]) -> Vec<u8> {
    sha256(&sha256(data))
}

/// Compute Hash160: `RIPEMD-160(SHA-256(data))`.
///
/// Returns the 20-byte digest as a fixed-size array. In this crate the
/// input is always a 33-byte compressed public key, but the function
/// accepts any byte string, as Hash160 is defined over arbitrary input.
///
/// # Example
///
/// ```
/// use beerpay_protocol::crypto::hash160;
///
/// let digest = hash160(&[0x02; 33]);
/// assert_eq!(digest.len(), 20);
/// ```
pub fn hash160(data: &[u8]) -> [u8; DIGEST_LENGTH] {
    let sha = Sha256::digest(data);
    let ripe = Ripemd160::digest(sha);
    ripe.into()
}
