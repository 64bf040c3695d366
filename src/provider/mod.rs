//! High-level passphrase encryption providers.
//!
//! Two envelope formats are implemented. [`AesProvider`] is the default:
//! a fresh random IV is prepended to the ciphertext, so equal plaintexts
//! encrypt differently every time. [`LegacyAesProvider`] speaks the older
//! container-framed format with a passphrase-derived IV; keep it only for
//! data written by that format. The two formats are not bit-compatible.

pub mod aes;
pub mod legacy;

pub use aes::AesProvider;
pub use legacy::LegacyAesProvider;

use crate::consts::AES_LEGAL_KEY_BITS;
use crate::error::{PhrasecryptError, Result};

/// An AES key width. The closed set of legal sizes makes an illegal
/// configuration unrepresentable past the constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySize {
    Bits128,
    Bits192,
    Bits256,
}

impl KeySize {
    /// Validate a key size given in bits.
    ///
    /// Anything outside {128, 192, 256} is rejected with an argument
    /// error before any derivation or cipher work happens.
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            128 => Ok(Self::Bits128),
            192 => Ok(Self::Bits192),
            256 => Ok(Self::Bits256),
            other => Err(PhrasecryptError::Argument(format!(
                "invalid AES key size: {other} bits (expected one of {AES_LEGAL_KEY_BITS:?})"
            ))),
        }
    }

    pub const fn bits(self) -> u32 {
        match self {
            Self::Bits128 => 128,
            Self::Bits192 => 192,
            Self::Bits256 => 256,
        }
    }

    /// Key width in bytes.
    pub const fn byte_len(self) -> usize {
        (self.bits() / 8) as usize
    }
}

impl Default for KeySize {
    fn default() -> Self {
        Self::Bits256
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_sizes() {
        assert_eq!(KeySize::from_bits(128).unwrap().byte_len(), 16);
        assert_eq!(KeySize::from_bits(192).unwrap().byte_len(), 24);
        assert_eq!(KeySize::from_bits(256).unwrap().byte_len(), 32);
    }

    #[test]
    fn illegal_sizes_rejected() {
        for bits in [0, 64, 129, 255, 512] {
            let err = KeySize::from_bits(bits).unwrap_err();
            assert!(matches!(err, PhrasecryptError::Argument(_)));
        }
    }
}
