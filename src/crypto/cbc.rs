//! src/crypto/cbc.rs
//!
//! AES-CBC over the RustCrypto block primitive, with strict PKCS#7
//! padding. All three legal AES key widths are supported through one
//! closed enum; callers never name a concrete cipher type.
//!
//! Encryption always emits a final padding block, so ciphertext length is
//! `(plaintext.len() / 16 + 1) * 16`. Decryption validates the padding
//! and reports any violation as a single undifferentiated
//! [`Crypto`](crate::PhrasecryptError::Crypto) error.

use crate::consts::AES_BLOCK_SIZE;
use crate::error::{PhrasecryptError, Result};

use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256, Block};

/// AES keyed for one of the three legal key widths.
pub(crate) enum AesCipher {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl AesCipher {
    /// Key the cipher. The key slice length selects the variant;
    /// anything other than 16, 24 or 32 bytes is an argument error.
    pub(crate) fn new(key: &[u8]) -> Result<Self> {
        match key.len() {
            16 => {
                let key: [u8; 16] = key.try_into().expect("length checked");
                Ok(Self::Aes128(Aes128::new(&key.into())))
            }
            24 => {
                let key: [u8; 24] = key.try_into().expect("length checked");
                Ok(Self::Aes192(Aes192::new(&key.into())))
            }
            32 => {
                let key: [u8; 32] = key.try_into().expect("length checked");
                Ok(Self::Aes256(Aes256::new(&key.into())))
            }
            n => Err(PhrasecryptError::Argument(format!(
                "invalid AES key length: {n} bytes"
            ))),
        }
    }

    fn encrypt_block(&self, block: &mut Block) {
        match self {
            Self::Aes128(c) => c.encrypt_block(block),
            Self::Aes192(c) => c.encrypt_block(block),
            Self::Aes256(c) => c.encrypt_block(block),
        }
    }

    fn decrypt_block(&self, block: &mut Block) {
        match self {
            Self::Aes128(c) => c.decrypt_block(block),
            Self::Aes192(c) => c.decrypt_block(block),
            Self::Aes256(c) => c.decrypt_block(block),
        }
    }
}

/// XOR two 16-byte blocks into `output`.
///
/// Callers pass exact-width arrays or checked slices; slices shorter than
/// 16 bytes would panic, which never happens in correct usage.
fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8; AES_BLOCK_SIZE]) {
    for i in 0..AES_BLOCK_SIZE {
        output[i] = block_a[i] ^ block_b[i];
    }
}

/// Encrypt `plaintext` under (key, iv) with CBC chaining and PKCS#7
/// padding. A full padding block is emitted even for block-aligned input,
/// so the empty plaintext produces exactly one block of ciphertext.
pub fn encrypt(key: &[u8], iv: &[u8; AES_BLOCK_SIZE], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = AesCipher::new(key)?;

    let padded_len = (plaintext.len() / AES_BLOCK_SIZE + 1) * AES_BLOCK_SIZE;
    let mut out = Vec::with_capacity(padded_len);
    let mut prev = *iv;

    let mut chunks = plaintext.chunks_exact(AES_BLOCK_SIZE);
    for chunk in &mut chunks {
        let mut mixed = [0u8; AES_BLOCK_SIZE];
        xor_blocks(chunk, &prev, &mut mixed);

        let mut block = Block::from(mixed);
        cipher.encrypt_block(&mut block);

        prev.copy_from_slice(&block);
        out.extend_from_slice(&block);
    }

    // Final block: remainder plus PKCS#7 fill.
    let rem = chunks.remainder();
    let pad = (AES_BLOCK_SIZE - rem.len()) as u8;
    let mut last = [pad; AES_BLOCK_SIZE];
    last[..rem.len()].copy_from_slice(rem);

    let mut mixed = [0u8; AES_BLOCK_SIZE];
    xor_blocks(&last, &prev, &mut mixed);
    let mut block = Block::from(mixed);
    cipher.encrypt_block(&mut block);
    out.extend_from_slice(&block);

    Ok(out)
}

/// Decrypt and strip PKCS#7 padding. Fails with a `Crypto` error when the
/// ciphertext length is not a positive multiple of the block width or the
/// recovered padding is malformed (the usual wrong-passphrase signature).
pub fn decrypt(key: &[u8], iv: &[u8; AES_BLOCK_SIZE], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let mut out = decrypt_raw(key, iv, ciphertext)?;
    let unpadded = unpadded_len(&out)?;
    out.truncate(unpadded);
    Ok(out)
}

/// Decrypt without touching the padding. The legacy envelope validates
/// padding itself and then trims to a recorded plaintext length.
pub(crate) fn decrypt_raw(
    key: &[u8],
    iv: &[u8; AES_BLOCK_SIZE],
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_SIZE != 0 {
        return Err(PhrasecryptError::Crypto(format!(
            "ciphertext length {} is not a positive multiple of the block size",
            ciphertext.len()
        )));
    }

    let cipher = AesCipher::new(key)?;
    let mut out = Vec::with_capacity(ciphertext.len());
    let mut prev = *iv;

    for chunk in ciphertext.chunks_exact(AES_BLOCK_SIZE) {
        let mut block = Block::clone_from_slice(chunk);
        cipher.decrypt_block(&mut block);

        let mut plain = [0u8; AES_BLOCK_SIZE];
        xor_blocks(&block, &prev, &mut plain);

        prev.copy_from_slice(chunk);
        out.extend_from_slice(&plain);
    }

    Ok(out)
}

/// Validate strict PKCS#7 padding and return the unpadded length.
pub(crate) fn unpadded_len(buf: &[u8]) -> Result<usize> {
    let pad = *buf
        .last()
        .ok_or_else(|| PhrasecryptError::Crypto("padding check failed".into()))?
        as usize;

    if pad == 0 || pad > AES_BLOCK_SIZE || pad > buf.len() {
        return Err(PhrasecryptError::Crypto("padding check failed".into()));
    }
    if buf[buf.len() - pad..].iter().any(|&b| b as usize != pad) {
        return Err(PhrasecryptError::Crypto("padding check failed".into()));
    }

    Ok(buf.len() - pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; 32] = [0x11; 32];
    const IV: [u8; 16] = [0x22; 16];

    #[test]
    fn roundtrip_various_sizes() {
        for size in [0usize, 1, 15, 16, 17, 31, 32, 1000] {
            let plaintext: Vec<u8> = (0..size).map(|i| i as u8).collect();
            let ciphertext = encrypt(&KEY, &IV, &plaintext).unwrap();
            assert_eq!(ciphertext.len(), (size / 16 + 1) * 16);
            let recovered = decrypt(&KEY, &IV, &ciphertext).unwrap();
            assert_eq!(recovered, plaintext);
        }
    }

    #[test]
    fn all_key_widths() {
        for key_len in [16usize, 24, 32] {
            let key = vec![0x55u8; key_len];
            let ciphertext = encrypt(&key, &IV, b"block cipher test").unwrap();
            assert_eq!(decrypt(&key, &IV, &ciphertext).unwrap(), b"block cipher test");
        }
    }

    #[test]
    fn illegal_key_width_rejected() {
        let err = encrypt(&[0u8; 20], &IV, b"x").unwrap_err();
        assert!(matches!(err, PhrasecryptError::Argument(_)));
    }

    #[test]
    fn misaligned_ciphertext_rejected() {
        let err = decrypt(&KEY, &IV, &[0u8; 17]).unwrap_err();
        assert!(matches!(err, PhrasecryptError::Crypto(_)));
        let err = decrypt(&KEY, &IV, &[]).unwrap_err();
        assert!(matches!(err, PhrasecryptError::Crypto(_)));
    }

    #[test]
    fn wrong_key_does_not_recover_plaintext() {
        let plaintext = b"some plaintext data here".to_vec();
        let ciphertext = encrypt(&KEY, &IV, &plaintext).unwrap();
        let wrong = [0x12u8; 32];
        // The padding check rejects a wrong key with overwhelming
        // probability; in no case may the plaintext come back.
        assert_ne!(decrypt(&wrong, &IV, &ciphertext).ok(), Some(plaintext));
    }

    #[test]
    fn strict_unpad() {
        assert_eq!(unpadded_len(&[1, 2, 3, 1]).unwrap(), 3);
        assert_eq!(unpadded_len(&[4, 4, 4, 4]).unwrap(), 0);
        assert!(unpadded_len(&[1, 2, 3, 0]).is_err());
        assert!(unpadded_len(&[1, 2, 3, 17]).is_err());
        assert!(unpadded_len(&[1, 2, 2, 3]).is_err());
    }
}
