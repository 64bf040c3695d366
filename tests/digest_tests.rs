//! tests/digest_tests.rs
//! Key-derivation behavior: determinism, key/IV divergence, and the
//! all-zero iteration-count fallback.

use phrasecrypt::crypto::digest;

#[test]
fn derive_is_a_pure_function() {
    let cases: &[&[u8]] = &[
        b"short",
        b"a much longer passphrase with spaces and punctuation!",
        "пароль-ключ".as_bytes(),
        &[0x00, 0x00, 0x07],
    ];

    for passphrase in cases {
        let first = digest::derive(passphrase, 32).unwrap();
        let second = digest::derive(passphrase, 32).unwrap();
        assert_eq!(first, second, "derivation must be deterministic");
        assert_eq!(first.len(), 32);
    }
}

#[test]
fn requested_length_is_honored() {
    for len in [1usize, 16, 24, 32, 64, 100] {
        assert_eq!(digest::derive(b"sizing", len).unwrap().len(), len);
    }
}

#[test]
fn key_and_iv_paths_diverge() {
    let key = digest::key_from_passphrase("shared passphrase", 16).unwrap();
    let iv = digest::iv_from_passphrase("shared passphrase", 16).unwrap();
    assert_ne!(key, iv, "IV derivation reverses the input, so outputs differ");

    // The IV path is itself deterministic.
    assert_eq!(
        iv,
        digest::iv_from_passphrase("shared passphrase", 16).unwrap()
    );
}

#[test]
fn different_passphrases_different_keys() {
    let a = digest::key_from_passphrase("passphrase one", 32).unwrap();
    let b = digest::key_from_passphrase("passphrase two", 32).unwrap();
    assert_ne!(a, b);
}

#[test]
fn empty_passphrase_uses_fallback_iterations() {
    // No non-zero byte to scan: falls through to the 255 * 10 default
    // instead of erroring.
    let key = digest::derive(&[], 32).unwrap();
    assert_eq!(key.len(), 32);
    assert_eq!(key, digest::derive(&[], 32).unwrap());
}

#[test]
fn all_zero_passphrase_uses_fallback_iterations() {
    // Every byte is zero — exercises the "no non-zero byte found" branch
    // with a non-empty input.
    let zeros = [0u8; 8];
    let key = digest::derive(&zeros, 16).unwrap();
    assert_eq!(key.len(), 16);

    // Distinct from the empty input: the salt hash differs.
    assert_ne!(key, digest::derive(&[], 16).unwrap());
}

#[test]
fn nul_only_passphrase_through_the_string_api() {
    let key = digest::key_from_passphrase("\u{0}\u{0}\u{0}", 32).unwrap();
    assert_eq!(key.len(), 32);
}
