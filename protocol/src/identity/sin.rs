//! # SIN: Secure Identity Numbers
//!
//! A SIN is the base58 rendering of a versioned, checksummed public key
//! hash:
//!
//! ```text
//! payload  = 0x0F || 0x02 || Hash160(compressed public key)   (22 bytes)
//! checksum = SHA-256(SHA-256(payload))[..4]                    (4 bytes)
//! SIN      = base58(payload || checksum)                      (~34 chars)
//! ```
//!
//! The version byte is fixed at 0x0F and the type byte at 0x02, the
//! "ephemeral" identity type: the keypair behind a SIN lives exactly as
//! long as it takes to hash the public key.
//!
//! Assembly works over hex strings at the seams (the checksum takes and
//! returns hex, the encoder takes hex) because the final value is an
//! *integer* to the base58 stage, not a byte string. See
//! [`crate::encoding::base58`] for what that implies about leading zeros.

use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

use crate::config::{
    CHECKSUM_LENGTH, DIGEST_LENGTH, SIN_PAYLOAD_LENGTH, SIN_TYPE_EPHEMERAL, SIN_VERSION_PREFIX,
};
use crate::crypto::hash::{double_sha256, hash160};
use crate::crypto::keys::{KeyError, Keypair, PublicKey};
use crate::encoding::base58;
use crate::encoding::EncodeError;

/// Errors that can abort SIN generation.
///
/// Everything here is fatal for the attempt in progress. No partial SIN
/// is ever returned; the caller may retry the whole pipeline from
/// scratch if it wants another roll of the dice.
#[derive(Debug, Error)]
pub enum SinError {
    /// A key stage failed (entropy, key material, or length contract).
    #[error("key stage failed: {0}")]
    Key(#[from] KeyError),

    /// An encoding stage failed. Unreachable through internal
    /// construction; seeing this means a bug, not bad luck.
    #[error("encoding stage failed: {0}")]
    Encode(#[from] EncodeError),
}

/// Compute the 4-byte payload checksum, in hex.
///
/// Takes the hex-encoded payload, double-SHA-256 hashes the underlying
/// bytes and returns the first [`CHECKSUM_LENGTH`] bytes as 8 hex
/// characters.
///
/// # Errors
///
/// [`EncodeError::MalformedHex`] if `payload_hex` is not valid hex. The
/// pipeline builds its payload internally, so hitting this from
/// [`Sin::encode`] is impossible; the error exists for direct callers.
pub fn checksum(payload_hex: &str) -> Result<String, EncodeError> {
    let payload =
        hex::decode(payload_hex).map_err(|e| EncodeError::MalformedHex(e.to_string()))?;
    let digest = double_sha256(&payload);
    Ok(hex::encode(&digest[..CHECKSUM_LENGTH]))
}

/// A Secure Identity Number.
///
/// Internally this is just the 20-byte Hash160 digest of the compressed
/// public key; the version/type bytes, checksum, and base58 text are
/// derived on demand by [`encode`](Self::encode). Two `Sin`s are equal
/// exactly when their digests are equal.
///
/// There is deliberately no way to parse a SIN string back into a `Sin`:
/// nothing in the pairing flow ever needs to, and the encoding is not
/// injective over byte strings (leading zero bytes vanish).
///
/// # Examples
///
/// ```
/// use beerpay_protocol::identity::Sin;
///
/// let sin = Sin::generate().unwrap();
/// let text = sin.encode();
/// assert!(!text.is_empty());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Sin {
    /// Hash160 of the compressed public key.
    digest: [u8; DIGEST_LENGTH],
}

impl Sin {
    /// Generate a SIN from a fresh ephemeral keypair.
    ///
    /// This is the all-or-nothing pipeline entry: keypair generation,
    /// compression, and digestion either all succeed or the error
    /// propagates untouched. The secret key is dropped before this
    /// function returns.
    pub fn generate() -> Result<Self, SinError> {
        let keypair = Keypair::generate()?;
        Ok(Self::from_public_key(&keypair.public_key()))
    }

    /// Derive the SIN for a given public key.
    ///
    /// The deterministic tail of the pipeline: compression followed by
    /// Hash160. Given the same key, the same SIN, every time.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        Self {
            digest: hash160(&public_key.compressed()),
        }
    }

    /// The raw 20-byte Hash160 digest underlying this SIN.
    pub fn digest(&self) -> &[u8; DIGEST_LENGTH] {
        &self.digest
    }

    /// The 44-character hex payload: version prefix, type byte, digest.
    pub fn payload_hex(&self) -> String {
        let mut payload = Vec::with_capacity(SIN_PAYLOAD_LENGTH);
        payload.push(SIN_VERSION_PREFIX);
        payload.push(SIN_TYPE_EPHEMERAL);
        payload.extend_from_slice(&self.digest);
        hex::encode(payload)
    }

    /// Render this SIN as base58 text.
    ///
    /// Typically 33 to 35 characters for this payload size; there is no
    /// fixed length guarantee (the value is encoded as an integer).
    pub fn encode(&self) -> String {
        let payload = self.payload_hex();
        let check = checksum(&payload).expect("internally built payload is valid hex");
        base58::encode(&format!("{payload}{check}"))
            .expect("payload and checksum are valid hex by construction")
    }
}

impl fmt::Display for Sin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl fmt::Debug for Sin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sin({})", self.encode())
    }
}

impl Serialize for Sin {
    /// Serializes as the base58 text, which is the only form the outside
    /// world (and the payment API's `id` field) ever sees.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

/// Generate one SIN and return its text form.
///
/// The convenience entry point for callers that don't care about the
/// intermediate type: either a valid SIN string comes back, or a
/// [`SinError`] explains which stage died. Never an empty or malformed
/// string.
pub fn generate_sin() -> Result<String, SinError> {
    let sin = Sin::generate()?.encode();
    tracing::debug!(sin = %sin, "generated ephemeral SIN");
    Ok(sin)
}
