//! src/provider/legacy.rs
//!
//! The legacy container-framed envelope, kept for compatibility with
//! data written by the original format.
//!
//! Envelope: a [`DataContainer`] whose one-field header records the
//! plaintext length (`OriginalDataSize: u32`, little-endian) followed by
//! the AES-CBC ciphertext. Both key and IV are derived from the
//! passphrase — the IV from the byte-reversed passphrase — so every
//! message under one passphrase shares the same (key, IV) pair.
//!
//! That determinism is a known weakness: equal plaintext prefixes under
//! the same passphrase produce equal ciphertext prefixes, and an observer
//! can tell identical messages apart from different ones. New data should
//! use [`AesProvider`](crate::provider::AesProvider) instead.

use crate::consts::{AES_BLOCK_SIZE, ORIGINAL_DATA_SIZE};
use crate::container::DataContainer;
use crate::crypto::{cbc, digest};
use crate::error::{PhrasecryptError, Result};
use crate::header::{BinaryHeader, EntryKind, EntryValue, HeaderEntry};
use crate::provider::KeySize;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use zeroize::Zeroize;

/// Passphrase-based AES-CBC encryption in the legacy container format.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyAesProvider {
    key_size: KeySize,
}

impl LegacyAesProvider {
    pub fn new(key_size: KeySize) -> Self {
        Self { key_size }
    }

    /// A provider from a key size in bits; rejects anything outside
    /// {128, 192, 256} with an argument error.
    pub fn with_key_size_bits(bits: u32) -> Result<Self> {
        Ok(Self::new(KeySize::from_bits(bits)?))
    }

    pub fn key_size(&self) -> KeySize {
        self.key_size
    }

    /// The one-field schema of the legacy envelope header.
    fn schema() -> Vec<HeaderEntry> {
        vec![HeaderEntry::placeholder(ORIGINAL_DATA_SIZE, EntryKind::U32)]
    }

    fn derive_key_iv(&self, passphrase: &str) -> Result<(Vec<u8>, [u8; AES_BLOCK_SIZE])> {
        let key = digest::key_from_passphrase(passphrase, self.key_size.byte_len())?;
        let mut iv_bytes = digest::iv_from_passphrase(passphrase, AES_BLOCK_SIZE)?;
        let iv: [u8; AES_BLOCK_SIZE] = iv_bytes
            .as_slice()
            .try_into()
            .expect("derived IV is one block");
        iv_bytes.zeroize();
        Ok((key, iv))
    }

    /// Encrypt `value` into a container whose header records the
    /// plaintext length.
    pub fn encrypt_bytes(&self, passphrase: &str, value: &[u8]) -> Result<Vec<u8>> {
        let original_size = u32::try_from(value.len()).map_err(|_| {
            PhrasecryptError::Argument(format!(
                "plaintext of {} bytes exceeds the legacy envelope's u32 length field",
                value.len()
            ))
        })?;

        let (mut key, mut iv) = self.derive_key_iv(passphrase)?;
        let encrypted = cbc::encrypt(&key, &iv, value);
        key.zeroize();
        iv.zeroize();
        let ciphertext = encrypted?;

        let mut header = BinaryHeader::new();
        header.add(ORIGINAL_DATA_SIZE, EntryValue::U32(original_size));
        Ok(DataContainer::from_parts(header, ciphertext).to_bytes())
    }

    /// Decrypt a legacy container envelope.
    ///
    /// The payload is decrypted, the padding validated (the only
    /// wrong-passphrase signal this deterministic framing has), and the
    /// result trimmed to the recorded `OriginalDataSize` — never by
    /// scanning for padding byte patterns.
    pub fn decrypt_bytes(&self, passphrase: &str, value: &[u8]) -> Result<Vec<u8>> {
        let container = DataContainer::unpack(value, &Self::schema())?;
        let entry = container.header().get(ORIGINAL_DATA_SIZE)?;
        let EntryValue::U32(original_size) = *entry.value() else {
            return Err(PhrasecryptError::Format(format!(
                "`{ORIGINAL_DATA_SIZE}` entry has unexpected kind {:?}",
                entry.kind()
            )));
        };
        let original_size = original_size as usize;

        let (mut key, mut iv) = self.derive_key_iv(passphrase)?;
        let decrypted = cbc::decrypt_raw(&key, &iv, container.data());
        key.zeroize();
        iv.zeroize();
        let mut plaintext = decrypted?;

        let unpadded = cbc::unpadded_len(&plaintext)?;
        if original_size > unpadded {
            return Err(PhrasecryptError::Crypto(format!(
                "recorded plaintext length {original_size} exceeds decrypted payload ({unpadded} bytes)"
            )));
        }
        plaintext.truncate(original_size);
        Ok(plaintext)
    }

    /// Encrypt a string, returning the envelope as standard base64.
    pub fn encrypt_string(&self, passphrase: &str, value: &str) -> Result<String> {
        Ok(BASE64.encode(self.encrypt_bytes(passphrase, value.as_bytes())?))
    }

    /// Decrypt a base64 envelope back to a string.
    pub fn decrypt_string(&self, passphrase: &str, value: &str) -> Result<String> {
        let envelope = BASE64
            .decode(value)
            .map_err(|e| PhrasecryptError::Format(format!("invalid base64: {e}")))?;
        let plaintext = self.decrypt_bytes(passphrase, &envelope)?;
        String::from_utf8(plaintext)
            .map_err(|e| PhrasecryptError::Format(format!("decrypted data is not UTF-8: {e}")))
    }
}
