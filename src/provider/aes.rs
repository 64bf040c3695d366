//! src/provider/aes.rs
//!
//! The default passphrase encryption provider.
//!
//! Envelope: `IV (16 bytes, random) ++ AES-CBC ciphertext (PKCS#7)`.
//! The key is derived from the passphrase with [`crypto::digest`]; the IV
//! is fresh OS randomness per message, so encrypting the same plaintext
//! twice yields different envelopes. Decryption derives the same key,
//! splits off the IV, and validates the padding — a wrong passphrase
//! surfaces as a `Crypto` error rather than silent garbage.

use crate::consts::AES_BLOCK_SIZE;
use crate::crypto::{cbc, digest, rng};
use crate::error::{PhrasecryptError, Result};
use crate::provider::KeySize;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use zeroize::Zeroize;

/// Passphrase-based AES-CBC encryption with a random-IV envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct AesProvider {
    key_size: KeySize,
}

impl AesProvider {
    /// A provider using the given key size.
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

    /// Encrypt `value`, returning `IV ++ ciphertext`.
    pub fn encrypt_bytes(&self, passphrase: &str, value: &[u8]) -> Result<Vec<u8>> {
        let mut key = digest::key_from_passphrase(passphrase, self.key_size.byte_len())?;
        let iv = rng::random_iv();

        let encrypted = cbc::encrypt(&key, &iv, value);
        key.zeroize();
        let ciphertext = encrypted?;

        let mut envelope = Vec::with_capacity(AES_BLOCK_SIZE + ciphertext.len());
        envelope.extend_from_slice(&iv);
        envelope.extend_from_slice(&ciphertext);
        Ok(envelope)
    }

    /// Decrypt an `IV ++ ciphertext` envelope.
    ///
    /// Fails with a `Crypto` error when the envelope is shorter than one
    /// block, the ciphertext is not block-aligned, or the padding check
    /// fails (wrong passphrase and corruption are indistinguishable here
    /// by design).
    pub fn decrypt_bytes(&self, passphrase: &str, value: &[u8]) -> Result<Vec<u8>> {
        if value.len() < AES_BLOCK_SIZE {
            return Err(PhrasecryptError::Crypto(format!(
                "envelope is {} bytes, shorter than the {AES_BLOCK_SIZE}-byte IV",
                value.len()
            )));
        }
        let iv: [u8; AES_BLOCK_SIZE] = value[..AES_BLOCK_SIZE]
            .try_into()
            .expect("length checked");

        let mut key = digest::key_from_passphrase(passphrase, self.key_size.byte_len())?;
        let decrypted = cbc::decrypt(&key, &iv, &value[AES_BLOCK_SIZE..]);
        key.zeroize();
        decrypted
    }

    /// Encrypt a string, returning the envelope as standard base64.
    pub fn encrypt_string(&self, passphrase: &str, value: &str) -> Result<String> {
        Ok(BASE64.encode(self.encrypt_bytes(passphrase, value.as_bytes())?))
    }

    /// Decrypt a base64 envelope back to a string.
    ///
    /// Invalid base64 and decrypted bytes that are not valid UTF-8 are
    /// format errors; cryptographic failures are `Crypto` as above.
    pub fn decrypt_string(&self, passphrase: &str, value: &str) -> Result<String> {
        let envelope = BASE64
            .decode(value)
            .map_err(|e| PhrasecryptError::Format(format!("invalid base64: {e}")))?;
        let plaintext = self.decrypt_bytes(passphrase, &envelope)?;
        String::from_utf8(plaintext)
            .map_err(|e| PhrasecryptError::Format(format!("decrypted data is not UTF-8: {e}")))
    }
}
