//! # Identity Module
//!
//! The SIN (Secure Identity Number) layer: the self-certifying identifier
//! Beerpay presents to the payment API when pairing an API token.
//!
//! The identity stack is deliberately short:
//!
//! 1. **Keypair**: A throwaway secp256k1 keypair ([`crate::crypto`]).
//! 2. **SIN**: The Hash160 digest of the compressed public key, wrapped
//!    in version/type bytes, checksummed, and base58-encoded. This is the
//!    only artifact that leaves the process.
//!
//! There is no decode path and no storage: a SIN proves "whoever sent
//! this held the key for a moment", which is all the pairing handshake
//! needs. Ephemeral by design.

pub mod sin;

pub use sin::{checksum, generate_sin, Sin, SinError};
