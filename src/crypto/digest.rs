//! src/crypto/digest.rs
//!
//! Deterministic key/IV derivation from a passphrase.
//!
//! The derivation is a pure function of the passphrase bytes: the salt is
//! the SHA-256 hash of the input, and the PBKDF2 iteration count is itself
//! derived from passphrase content (first non-zero byte value × 10). Two
//! independent processes given the same passphrase therefore agree on the
//! same key material with no shared state — the property the encrypt and
//! decrypt sides rely on.
//!
//! Key and IV derivation for one passphrase must not collide, so the IV
//! path feeds the byte-reversed passphrase into the same derivation,
//! which changes the salt and (usually) the iteration count as well.

use crate::consts::{ITERATION_FALLBACK_BASE, ITERATION_SCALE};
use crate::error::{PhrasecryptError, Result};

use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::{Digest as _, Sha256};

/// Derive `output_len` bytes of key material from `value`.
///
/// Salt = SHA-256(value); iterations = first non-zero byte of `value`
/// (or 255 when there is none) × 10; PRF = HMAC-SHA256.
///
/// The all-zero fallback means an empty passphrase derives successfully —
/// callers that want to forbid empty passphrases must do so themselves.
pub fn derive(value: &[u8], output_len: usize) -> Result<Vec<u8>> {
    let salt = Sha256::digest(value);
    let iterations = iteration_count(value);

    let mut out = vec![0u8; output_len];
    pbkdf2::<Hmac<Sha256>>(value, &salt, iterations, &mut out)
        .map_err(|e| PhrasecryptError::Crypto(format!("PBKDF2 failed: {e}")))?;

    Ok(out)
}

/// Derive an encryption key of `size` bytes from a passphrase.
pub fn key_from_passphrase(passphrase: &str, size: usize) -> Result<Vec<u8>> {
    derive(passphrase.as_bytes(), size)
}

/// Derive an initialization vector of `size` bytes from a passphrase.
///
/// The passphrase bytes are reversed before derivation so that the IV
/// differs from the key even though both come from the same passphrase.
pub fn iv_from_passphrase(passphrase: &str, size: usize) -> Result<Vec<u8>> {
    let mut reversed = passphrase.as_bytes().to_vec();
    reversed.reverse();
    derive(&reversed, size)
}

/// PBKDF2 iteration count for a passphrase: first non-zero byte × 10,
/// falling back to 255 × 10 when every byte is zero (or the input is empty).
fn iteration_count(value: &[u8]) -> u32 {
    let base = value
        .iter()
        .copied()
        .find(|b| *b != 0)
        .unwrap_or(ITERATION_FALLBACK_BASE);
    u32::from(base) * ITERATION_SCALE
}
