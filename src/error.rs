//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All fallible operations return [`Result<T, PhrasecryptError>`](PhrasecryptError).

use thiserror::Error;

/// The error type for all phrasecrypt operations.
///
/// The four variants correspond to the four failure classes of the
/// container format and the encryption surface. Wrong-passphrase and
/// corrupted-ciphertext failures are deliberately reported as the same
/// [`Crypto`](PhrasecryptError::Crypto) variant so that callers cannot be
/// turned into a padding oracle by distinguishing them.
#[derive(Error, Debug)]
pub enum PhrasecryptError {
    /// Malformed binary data.
    ///
    /// Raised when header or entry bytes do not match their declared
    /// shape: a slice whose length differs from the entry kind's fixed
    /// width, a buffer shorter than the cumulative schema width, invalid
    /// base64 on the string surface, or decrypted text that is not UTF-8.
    #[error("Format error: {0}")]
    Format(String),

    /// A header entry with the requested name does not exist.
    #[error("No header entry named `{0}`")]
    NotFound(String),

    /// An illegal parameter was supplied.
    ///
    /// Raised before any cryptographic work is attempted — most notably
    /// for a key size outside the AES legal set {128, 192, 256}.
    #[error("Invalid argument: {0}")]
    Argument(String),

    /// A cryptographic operation failed.
    ///
    /// Covers KDF failures and padding/length validation during
    /// decryption. A wrong passphrase almost always manifests here.
    #[error("Crypto error: {0}")]
    Crypto(String),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, PhrasecryptError>;
