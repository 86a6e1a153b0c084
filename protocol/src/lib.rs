// Copyright (c) 2026 Coredump Hackerspace. MIT License.
// See LICENSE for details.

//! # Beerpay Protocol: SIN Generation
//!
//! The cryptographic core of Beerpay: generation of a Bitcoin SIN
//! (Secure Identity Number), the self-certifying identifier the payment
//! API uses to pair an API token with a client.
//!
//! A SIN is derived from a throwaway secp256k1 keypair through a fixed
//! pipeline of hashing and encoding:
//!
//! ```text
//! keypair (secp256k1)
//!     -> public key, 64 bytes (X || Y)
//!     -> compressed key, 33 bytes (parity prefix + X)
//!     -> Hash160 = RIPEMD-160(SHA-256(...)), 20 bytes
//!     -> 0x0F || 0x02 || digest, 22 bytes
//!     -> + first 4 bytes of SHA-256(SHA-256(payload)), 26 bytes
//!     -> base58 text
//! ```
//!
//! See <https://en.bitcoin.it/wiki/Identity_protocol_v1#Creating_a_SIN>.
//!
//! ## Architecture
//!
//! - **crypto**: Keypair generation and the (deliberately non-standard)
//!   key compression, plus the hash primitives.
//! - **encoding**: The base58 integer encoder. Not Base58Check; read the
//!   module docs before touching it.
//! - **identity**: The [`identity::Sin`] type and the one-call
//!   [`identity::generate_sin`] entry point.
//! - **config**: Every protocol constant. No magic numbers elsewhere.
//!
//! ## Design Philosophy
//!
//! 1. The pipeline is a pure function from OS entropy to SIN text. No
//!    stage keeps state; every invocation is independent.
//! 2. Keys are ephemeral. The secret scalar is dropped as soon as the
//!    public key has been derived; nothing here persists or exports it.
//! 3. Any stage failure aborts the whole generation. A caller gets a
//!    valid SIN or a typed error, never a partial result.

pub mod config;
pub mod crypto;
pub mod encoding;
pub mod identity;
