//! # Keys
//!
//! secp256k1 keypair generation and the key compression step of the SIN
//! pipeline.
//!
//! Every SIN starts life as a fresh keypair. The secret scalar exists only
//! long enough to derive the public point; it is never serialized, never
//! logged, and zeroized on drop (courtesy of `k256`). If you find yourself
//! wanting to store one, you're building a wallet, and this is not a
//! wallet.
//!
//! ## Security considerations
//!
//! - Key generation draws from the OS RNG (`OsRng`, i.e. `/dev/urandom`
//!   on Unix) and fails loudly if the OS can't deliver bytes. There is no
//!   fallback generator, by requirement: a weak SIN is worse than no SIN.
//! - Scalars are rejection-sampled into [1, n-1], so the distribution is
//!   uniform over valid secret keys.
//! - Key bytes are never logged. If you add logging to this module,
//!   you will be asked to leave.

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::SecretKey;
use rand::rngs::OsRng;
use rand::RngCore;
use std::fmt;
use thiserror::Error;

use crate::config::{COMPRESSED_KEY_LENGTH, UNCOMPRESSED_KEY_LENGTH};

/// Errors that can occur during key operations.
///
/// These are intentionally vague about *why* something failed. Leaking
/// details about key material through error messages is a classic footgun.
#[derive(Debug, Error)]
pub enum KeyError {
    /// The OS secure random source could not produce bytes. Fatal; there
    /// is no fallback entropy source.
    #[error("secure random source unavailable: {0}")]
    EntropyUnavailable(#[source] rand::Error),

    /// The secret key bytes do not form a valid secp256k1 scalar.
    #[error("invalid secret key bytes: wrong length or not a valid scalar")]
    InvalidSecretKey,

    /// The public key bytes are not a valid point on secp256k1.
    #[error("invalid public key bytes: not a valid secp256k1 point")]
    InvalidPublicKey,

    /// The compression stage received a key of the wrong length. This is
    /// a contract violation by the caller, not bad user input.
    #[error("invalid key length: expected {expected} bytes, got {got}")]
    InvalidKeyLength {
        /// Expected number of bytes.
        expected: usize,
        /// Actual number of bytes.
        got: usize,
    },
}

/// An ephemeral secp256k1 keypair.
///
/// The starting point of SIN generation. Constructed, asked once for its
/// public key, then dropped; there is deliberately no way to get the
/// secret scalar back out.
///
/// # Examples
///
/// ```
/// use beerpay_protocol::crypto::Keypair;
///
/// let keypair = Keypair::generate().unwrap();
/// assert_eq!(keypair.public_key_bytes().len(), 64);
/// ```
pub struct Keypair {
    /// The secp256k1 secret scalar. Zeroized when the keypair drops.
    secret_key: SecretKey,
}

/// The public half of a keypair: a point on secp256k1, stored as its
/// 64-byte uncompressed encoding (big-endian X followed by big-endian Y,
/// without the SEC1 `0x04` tag byte).
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    bytes: [u8; UNCOMPRESSED_KEY_LENGTH],
}

impl Keypair {
    /// Generate a fresh keypair from the OS cryptographic RNG.
    ///
    /// The secret scalar is rejection-sampled: draw 32 random bytes,
    /// accept if they fall in [1, n-1], redraw otherwise. A redraw happens
    /// with probability about 2^-128, so the loop is all but theoretical,
    /// but it keeps the distribution exactly uniform over valid scalars.
    ///
    /// # Errors
    ///
    /// [`KeyError::EntropyUnavailable`] if the OS random source fails.
    /// No silent fallback; the whole SIN generation aborts.
    pub fn generate() -> Result<Self, KeyError> {
        let mut candidate = [0u8; 32];
        loop {
            OsRng
                .try_fill_bytes(&mut candidate)
                .map_err(KeyError::EntropyUnavailable)?;
            if let Ok(secret_key) = SecretKey::from_slice(&candidate) {
                // Wipe the stack copy of the scalar; the SecretKey keeps
                // its own zeroizing buffer.
                candidate.fill(0);
                return Ok(Self { secret_key });
            }
        }
    }

    /// Reconstruct a keypair from raw 32-byte secret key material.
    ///
    /// Exists for deterministic fixtures and test vectors. Production SIN
    /// generation always goes through [`generate`](Self::generate); a SIN
    /// built from a key somebody else knows certifies nothing.
    pub fn from_bytes(secret_key_bytes: &[u8; 32]) -> Result<Self, KeyError> {
        let secret_key =
            SecretKey::from_slice(secret_key_bytes).map_err(|_| KeyError::InvalidSecretKey)?;
        Ok(Self { secret_key })
    }

    /// Reconstruct a keypair from a hex-encoded secret key.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(hex_str).map_err(|_| KeyError::InvalidSecretKey)?;
        let arr: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| KeyError::InvalidSecretKey)?;
        Self::from_bytes(&arr)
    }

    /// Returns the public key for this keypair.
    pub fn public_key(&self) -> PublicKey {
        let point = self.secret_key.public_key().to_encoded_point(false);
        // An uncompressed SEC1 encoding is always 0x04 || X || Y; strip
        // the tag byte to get the raw 64-byte form.
        let mut bytes = [0u8; UNCOMPRESSED_KEY_LENGTH];
        bytes.copy_from_slice(&point.as_bytes()[1..]);
        PublicKey { bytes }
    }

    /// The raw 64-byte uncompressed public key. Safe to share.
    pub fn public_key_bytes(&self) -> [u8; UNCOMPRESSED_KEY_LENGTH] {
        self.public_key().bytes
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print secret material in debug output. Not even "partially."
        write!(f, "Keypair(pub={})", &self.public_key().to_hex()[..16])
    }
}

// ---------------------------------------------------------------------------
// PublicKey
// ---------------------------------------------------------------------------

impl PublicKey {
    /// Try to build a `PublicKey` from a 64-byte X||Y slice.
    ///
    /// Validates the length and that the coordinates form a real point on
    /// secp256k1. We don't accept any 64 bytes; off-curve "keys" would
    /// produce digests no actual keypair can certify.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        if slice.len() != UNCOMPRESSED_KEY_LENGTH {
            return Err(KeyError::InvalidPublicKey);
        }
        let mut sec1 = [0u8; UNCOMPRESSED_KEY_LENGTH + 1];
        sec1[0] = 0x04;
        sec1[1..].copy_from_slice(slice);
        k256::PublicKey::from_sec1_bytes(&sec1).map_err(|_| KeyError::InvalidPublicKey)?;

        let mut bytes = [0u8; UNCOMPRESSED_KEY_LENGTH];
        bytes.copy_from_slice(slice);
        Ok(Self { bytes })
    }

    /// Get the raw 64-byte X||Y encoding.
    pub fn as_bytes(&self) -> &[u8; UNCOMPRESSED_KEY_LENGTH] {
        &self.bytes
    }

    /// The 33-byte compressed form used by the SIN digest. See
    /// [`compress_key`] for the exact (non-standard) rules.
    pub fn compressed(&self) -> [u8; COMPRESSED_KEY_LENGTH] {
        compress_key(&self.bytes).expect("stored public key is always 64 bytes")
    }

    /// Hex-encoded representation. 128 characters for 64 bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Parse a hex-encoded public key string.
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(s).map_err(|_| KeyError::InvalidPublicKey)?;
        Self::try_from_slice(&bytes)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", &self.to_hex()[..16])
    }
}

// ---------------------------------------------------------------------------
// Compression
// ---------------------------------------------------------------------------

/// Compress a 64-byte uncompressed public key to its 33-byte form:
/// a parity prefix (0x02 even, 0x03 odd) followed by the X coordinate.
///
/// **This is not textbook SEC1 compression.** The parity bit here is the
/// parity of the *entire 64-byte key* interpreted as one big-endian
/// integer, not the parity of the Y coordinate alone. (The two agree on
/// the low bit of the final byte, but the rule is stated, tested, and
/// must stay this way: the Hash160 digest and checksum of every SIN are
/// computed over exactly this output, so "correcting" it to the SEC1 rule
/// would change identities the payment API has already seen.)
///
/// Since the parity of a big-endian integer is the low bit of its last
/// byte, no big-integer arithmetic is needed.
///
/// # Errors
///
/// [`KeyError::InvalidKeyLength`] if the input is not exactly 64 bytes.
/// That means a caller broke the pipeline contract; it is not a condition
/// to retry.
pub fn compress_key(key: &[u8]) -> Result<[u8; COMPRESSED_KEY_LENGTH], KeyError> {
    if key.len() != UNCOMPRESSED_KEY_LENGTH {
        return Err(KeyError::InvalidKeyLength {
            expected: UNCOMPRESSED_KEY_LENGTH,
            got: key.len(),
        });
    }

    let parity_even = key[UNCOMPRESSED_KEY_LENGTH - 1] & 1 == 0;
    let mut compressed = [0u8; COMPRESSED_KEY_LENGTH];
    compressed[0] = if parity_even { 0x02 } else { 0x03 };
    compressed[1..].copy_from_slice(&key[..32]);
    Ok(compressed)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Secret key of the fixed test identity used across the test suite.
    const TEST_SECRET_HEX: &str =
        "a5d5bde134829f76b5457a9b71ab73abc291b6423e807aced374f5ed73bb10f0";

    /// Uncompressed public key (X || Y) of [`TEST_SECRET_HEX`].
    const TEST_PUBLIC_HEX: &str =
        "8440d3ca303ac02486f841dbe77bb04dcd4cef269a305b74f072dd50ac6ad112\
         4f478d07b3a4be7da95b8648f03ccc9bec133701bd658dd8629eb8bb47979364";

    #[test]
    fn test_generate_produces_64_byte_public_key() {
        let keypair = Keypair::generate().unwrap();
        assert_eq!(keypair.public_key_bytes().len(), 64);
    }

    #[test]
    fn test_two_generated_keypairs_are_different() {
        // If this fails, your RNG is broken and you should panic (the
        // emotion, not the macro).
        let a = Keypair::generate().unwrap();
        let b = Keypair::generate().unwrap();
        assert_ne!(a.public_key_bytes(), b.public_key_bytes());
    }

    #[test]
    fn test_known_secret_derives_known_public_key() {
        let keypair = Keypair::from_hex(TEST_SECRET_HEX).unwrap();
        assert_eq!(keypair.public_key().to_hex(), TEST_PUBLIC_HEX);
    }

    #[test]
    fn test_compress_known_key() {
        let keypair = Keypair::from_hex(TEST_SECRET_HEX).unwrap();
        let compressed = keypair.public_key().compressed();
        assert_eq!(
            hex::encode(compressed),
            "028440d3ca303ac02486f841dbe77bb04dcd4cef269a305b74f072dd50ac6ad112"
        );
    }

    #[test]
    fn compress_rejects_wrong_lengths() {
        assert!(matches!(
            compress_key(&[0u8; 63]),
            Err(KeyError::InvalidKeyLength {
                expected: 64,
                got: 63
            })
        ));
        assert!(matches!(
            compress_key(&[0u8; 65]),
            Err(KeyError::InvalidKeyLength { got: 65, .. })
        ));
        assert!(compress_key(&[]).is_err());
    }

    #[test]
    fn test_compress_output_shape_for_random_keys() {
        // For any valid key: 33 bytes, prefix in {0x02, 0x03}, body is X.
        for _ in 0..32 {
            let public = Keypair::generate().unwrap().public_key();
            let compressed = public.compressed();
            assert_eq!(compressed.len(), 33);
            assert!(compressed[0] == 0x02 || compressed[0] == 0x03);
            assert_eq!(&compressed[1..], &public.as_bytes()[..32]);
        }
    }

    #[test]
    fn test_compress_parity_follows_last_byte() {
        // The prefix is decided by the low bit of the final byte of Y,
        // which equals the parity of the whole key as one integer.
        let mut key = [0u8; 64];
        key[0] = 0x01; // keep X nonzero so the fixture looks like a key
        key[63] = 0x02;
        assert_eq!(compress_key(&key).unwrap()[0], 0x02);
        key[63] = 0x03;
        assert_eq!(compress_key(&key).unwrap()[0], 0x03);
    }

    #[test]
    fn test_from_bytes_roundtrips_public_key() {
        let secret = hex::decode(TEST_SECRET_HEX).unwrap();
        let arr: [u8; 32] = secret.as_slice().try_into().unwrap();
        let keypair = Keypair::from_bytes(&arr).unwrap();
        assert_eq!(keypair.public_key().to_hex(), TEST_PUBLIC_HEX);
    }

    #[test]
    fn test_invalid_secret_keys_rejected() {
        // Too short, not hex, and the all-zero scalar (not in [1, n-1]).
        assert!(Keypair::from_hex("deadbeef").is_err());
        assert!(Keypair::from_hex("not-hex-at-all").is_err());
        assert!(Keypair::from_bytes(&[0u8; 32]).is_err());
    }

    #[test]
    fn test_public_key_try_from_slice_roundtrip() {
        let keypair = Keypair::generate().unwrap();
        let bytes = keypair.public_key_bytes();
        let recovered = PublicKey::try_from_slice(&bytes).unwrap();
        assert_eq!(recovered.as_bytes(), &bytes);
    }

    #[test]
    fn test_public_key_rejects_wrong_length() {
        assert!(PublicKey::try_from_slice(&[0u8; 32]).is_err());
        assert!(PublicKey::try_from_slice(&[0u8; 65]).is_err());
    }

    #[test]
    fn test_public_key_rejects_off_curve_point() {
        // All-0xFF coordinates are not a point on secp256k1.
        assert!(PublicKey::try_from_slice(&[0xFF; 64]).is_err());
    }

    #[test]
    fn public_key_hex_roundtrip() {
        let keypair = Keypair::generate().unwrap();
        let public = keypair.public_key();
        let recovered = PublicKey::from_hex(&public.to_hex()).unwrap();
        assert_eq!(public, recovered);
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let keypair = Keypair::from_hex(TEST_SECRET_HEX).unwrap();
        let debug_str = format!("{:?}", keypair);
        assert!(debug_str.starts_with("Keypair(pub="));
        assert!(!debug_str.contains(TEST_SECRET_HEX));
        assert!(!debug_str.contains(&TEST_SECRET_HEX[..16]));
    }
}
