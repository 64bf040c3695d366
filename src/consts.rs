//! # Constants
//!
//! Constants used throughout the library for the cipher geometry, key
//! derivation, and the legacy envelope schema.

/// AES block width in bytes. Also the IV width for both envelope formats.
pub const AES_BLOCK_SIZE: usize = 16;

/// The key sizes (in bits) that AES accepts.
///
/// Any other value is rejected with
/// [`PhrasecryptError::Argument`](crate::PhrasecryptError::Argument)
/// before any cryptographic operation is attempted.
pub const AES_LEGAL_KEY_BITS: [u32; 3] = [128, 192, 256];

/// Multiplier applied to the iteration base when deriving the PBKDF2
/// iteration count from passphrase content.
pub const ITERATION_SCALE: u32 = 10;

/// Iteration base used when the passphrase contains no non-zero byte
/// (including the empty passphrase). The maximum byte value.
pub const ITERATION_FALLBACK_BASE: u8 = u8::MAX;

/// Name of the single header field the legacy envelope carries: the
/// plaintext length in bytes, used to trim cipher padding deterministically.
pub const ORIGINAL_DATA_SIZE: &str = "OriginalDataSize";
