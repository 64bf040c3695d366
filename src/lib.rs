// src/lib.rs

//! # phrasecrypt
//!
//! Passphrase-based symmetric encryption of byte buffers and strings,
//! packaged in a self-describing binary container.
//!
//! Three layers cooperate:
//!
//! - [`crypto::digest`] derives key material deterministically from a
//!   passphrase (PBKDF2 over a content-derived salt and iteration count),
//!   so independent encrypt and decrypt calls agree without shared state.
//! - [`header`] and [`container`] implement a generic fixed-width binary
//!   header format and the `header ++ payload` container built on it.
//! - [`provider`] combines both with AES-CBC into two envelope formats:
//!   the default random-IV [`AesProvider`] and the container-framed
//!   [`LegacyAesProvider`].
//!
//! The round-trip property holds exactly for every input, including the
//! empty buffer and arbitrary non-UTF-8 bytes (via the `*_bytes` surface):
//!
//! ```
//! let encrypted = phrasecrypt::encrypt_string("correct horse", "battery staple")?;
//! let decrypted = phrasecrypt::decrypt_string("correct horse", &encrypted)?;
//! assert_eq!(decrypted, "battery staple");
//! # Ok::<(), phrasecrypt::PhrasecryptError>(())
//! ```
//!
//! All operations are synchronous pure functions of their inputs (plus OS
//! randomness for the default envelope's IV); there is no shared mutable
//! state, so calls may run fully in parallel.

pub mod consts;
pub mod container;
pub mod crypto;
pub mod error;
pub mod header;
pub mod provider;

// High-level API — this is what most users import
pub use container::DataContainer;
pub use error::{PhrasecryptError, Result};
pub use header::{BinaryHeader, EntryKind, EntryValue, HeaderEntry};
pub use provider::{AesProvider, KeySize, LegacyAesProvider};

/// Encrypt bytes with the default provider (random IV, 256-bit key).
pub fn encrypt_bytes(passphrase: &str, value: &[u8]) -> Result<Vec<u8>> {
    AesProvider::default().encrypt_bytes(passphrase, value)
}

/// Decrypt bytes produced by [`encrypt_bytes`].
pub fn decrypt_bytes(passphrase: &str, value: &[u8]) -> Result<Vec<u8>> {
    AesProvider::default().decrypt_bytes(passphrase, value)
}

/// Encrypt a string with the default provider, returning standard base64.
pub fn encrypt_string(passphrase: &str, value: &str) -> Result<String> {
    AesProvider::default().encrypt_string(passphrase, value)
}

/// Decrypt a base64 string produced by [`encrypt_string`].
pub fn decrypt_string(passphrase: &str, value: &str) -> Result<String> {
    AesProvider::default().decrypt_string(passphrase, value)
}
