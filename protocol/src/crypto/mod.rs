//! # Cryptographic Primitives
//!
//! Key generation, key compression, and the hash chain that turns a public
//! key into a 20-byte identity digest.
//!
//! We deliberately chose boring, well-audited building blocks:
//!
//! - **secp256k1** via `k256`: the Bitcoin curve, because SINs are a
//!   Bitcoin identity format and the digests must match what the payment
//!   API expects.
//! - **SHA-256** and **RIPEMD-160** via the RustCrypto crates: the exact
//!   pair Hash160 is defined over.
//!
//! One warning up front: [`keys::compress_key`] does NOT implement
//! textbook SEC1 point compression. Read its docs before "fixing" it.

pub mod hash;
pub mod keys;

pub use hash::{double_sha256, hash160, sha256};
pub use keys::{compress_key, KeyError, Keypair, PublicKey};
