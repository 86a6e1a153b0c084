//! # Protocol Constants
//!
//! Every magic number in the SIN pipeline lives here. If you're hardcoding
//! a constant somewhere else, you're doing it wrong and you owe the
//! hackerspace a beer.
//!
//! Most of these are fixed by the Bitcoin identity protocol; changing them
//! changes every SIN this crate will ever produce, so don't.

// ---------------------------------------------------------------------------
// SIN Format
// ---------------------------------------------------------------------------

/// Version prefix byte of every SIN payload. Always 0x0F.
pub const SIN_VERSION_PREFIX: u8 = 0x0F;

/// SIN type byte: 0x02 marks an "ephemeral" identity, which is the only
/// kind this crate produces. The keypair behind it is generated, hashed,
/// and thrown away.
pub const SIN_TYPE_EPHEMERAL: u8 = 0x02;

// ---------------------------------------------------------------------------
// Stage Sizes
// ---------------------------------------------------------------------------

/// Uncompressed secp256k1 public key: 32-byte X followed by 32-byte Y,
/// big-endian, no SEC1 tag byte.
pub const UNCOMPRESSED_KEY_LENGTH: usize = 64;

/// Compressed key: 1 parity prefix byte + the 32-byte X coordinate.
pub const COMPRESSED_KEY_LENGTH: usize = 33;

/// Hash160 output: RIPEMD-160 digests are 20 bytes.
pub const DIGEST_LENGTH: usize = 20;

/// SIN payload: version prefix + type byte + digest.
pub const SIN_PAYLOAD_LENGTH: usize = 2 + DIGEST_LENGTH;

/// Checksum: the first 4 bytes of a double SHA-256 over the payload.
pub const CHECKSUM_LENGTH: usize = 4;

// ---------------------------------------------------------------------------
// Base58
// ---------------------------------------------------------------------------

/// The 58-symbol base58 alphabet. Drops 0, O, I and l so nobody has to
/// squint at a receipt wondering which oh they're looking at.
pub const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

// ---------------------------------------------------------------------------
// Versioning
// ---------------------------------------------------------------------------

/// Protocol crate version string, for CLI version output.
pub const PROTOCOL_VERSION: &str = "0.1.0";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_has_58_symbols() {
        assert_eq!(BASE58_ALPHABET.len(), 58);
    }

    #[test]
    fn test_alphabet_symbols_are_unique() {
        // A duplicated symbol would make two different remainders render
        // identically. Cheap to check, catastrophic to miss.
        let mut seen = std::collections::HashSet::new();
        assert!(BASE58_ALPHABET.chars().all(|c| seen.insert(c)));
    }

    #[test]
    fn test_alphabet_excludes_ambiguous_characters() {
        for ambiguous in ['0', 'O', 'I', 'l'] {
            assert!(!BASE58_ALPHABET.contains(ambiguous));
        }
    }

    #[test]
    fn test_stage_sizes_compose() {
        // The payload is exactly version + type + digest, and the final
        // pre-encoding value is payload + checksum (26 bytes).
        assert_eq!(SIN_PAYLOAD_LENGTH, 22);
        assert_eq!(SIN_PAYLOAD_LENGTH + CHECKSUM_LENGTH, 26);
        assert_eq!(UNCOMPRESSED_KEY_LENGTH, 2 * 32);
        assert_eq!(COMPRESSED_KEY_LENGTH, 1 + 32);
    }
}
