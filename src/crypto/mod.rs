//! Low-level crypto primitives: key derivation, the AES-CBC block layer,
//! and secure randomness.
//!
//! See the crate root for the high-level provider API built on top.

pub mod cbc;
pub mod digest;
pub mod rng;
