// src/crypto/rng.rs
//! Cryptographically secure randomness for envelope IVs.
//!
//! `OsRng` needs no seeding or locking; every call pulls fresh bytes from
//! the operating system CSPRNG.

use crate::consts::AES_BLOCK_SIZE;

use rand::rngs::OsRng;
use rand::RngCore;

/// Generate a fresh random IV of one AES block.
pub fn random_iv() -> [u8; AES_BLOCK_SIZE] {
    let mut iv = [0u8; AES_BLOCK_SIZE];
    OsRng.fill_bytes(&mut iv);
    iv
}
