//! # Encoding
//!
//! The text encoding at the end of the SIN pipeline. One module, one job:
//! base58, in the exact dialect the identity format uses.

pub mod base58;

pub use base58::{encode, EncodeError};
