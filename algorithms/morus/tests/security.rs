//! Security Property Tests
//!
//! Tamper detection, key/nonce separation, associated-data binding and
//! plaintext erasure on authentication failure.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used)]

use morus::{AuthenticationFailed, Morus1280, NONCE_SIZE, TAG_SIZE};

const KEY: [u8; 32] = [0x42; 32];
const NONCE: [u8; NONCE_SIZE] = [0x24; NONCE_SIZE];

fn message(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 + 3) as u8).collect()
}

// =============================================================================
// TAMPER DETECTION
// =============================================================================

#[test]
fn test_every_ciphertext_bit_flip_rejected() {
    let aead = Morus1280::new(&KEY);
    let sealed = aead.seal(&NONCE, &message(37), b"header");

    for byte in 0..sealed.len() {
        for bit in 0..8 {
            let mut bad = sealed.clone();
            bad[byte] ^= 1 << bit;
            assert_eq!(
                aead.open(&NONCE, &bad, b"header"),
                Err(AuthenticationFailed),
                "Accepted flip at byte {byte} bit {bit}"
            );
        }
    }
}

#[test]
fn test_associated_data_bit_flip_rejected() {
    let aead = Morus1280::new(&KEY);
    let ad = message(45);
    let sealed = aead.seal(&NONCE, b"payload", &ad);

    for byte in 0..ad.len() {
        let mut bad_ad = ad.clone();
        bad_ad[byte] ^= 0x80;
        assert!(aead.open(&NONCE, &sealed, &bad_ad).is_err(), "AD byte {byte}");
    }
}

#[test]
fn test_truncation_and_extension_rejected() {
    let aead = Morus1280::new(&KEY);
    let sealed = aead.seal(&NONCE, &message(64), b"");

    for cut in 1..sealed.len() {
        assert!(aead.open(&NONCE, &sealed[..sealed.len() - cut], b"").is_err());
    }

    let mut extended = sealed.clone();
    extended.push(0);
    assert!(aead.open(&NONCE, &extended, b"").is_err());
}

#[test]
fn test_ad_and_message_not_interchangeable() {
    // Moving bytes between AD and message changes the bound lengths.
    let aead = Morus1280::new(&KEY);
    let a = aead.seal(&NONCE, b"", b"data");
    let b = aead.seal(&NONCE, b"data", b"");
    assert_ne!(a[a.len() - TAG_SIZE..], b[b.len() - TAG_SIZE..]);
}

#[test]
fn test_zero_padding_is_not_malleable() {
    // An AD of "x" and of "x\0" absorb the same padded block; the length
    // binding must still separate them.
    let aead = Morus1280::new(&KEY);
    let a = aead.seal(&NONCE, b"m", b"x");
    let b = aead.seal(&NONCE, b"m", b"x\0");
    assert_ne!(a, b);
    assert!(aead.open(&NONCE, &a, b"x\0").is_err());
}

// =============================================================================
// KEY / NONCE SEPARATION
// =============================================================================

#[test]
fn test_wrong_key_rejected() {
    let sealed = Morus1280::new(&KEY).seal(&NONCE, b"secret", b"");
    for i in 0..32 {
        let mut key = KEY;
        key[i] ^= 1;
        assert!(Morus1280::new(&key).open(&NONCE, &sealed, b"").is_err());
    }
}

#[test]
fn test_wrong_nonce_rejected() {
    let aead = Morus1280::new(&KEY);
    let sealed = aead.seal(&NONCE, b"secret", b"");
    for i in 0..NONCE_SIZE {
        let mut nonce = NONCE;
        nonce[i] ^= 1;
        assert!(aead.open(&nonce, &sealed, b"").is_err());
    }
}

#[test]
fn test_nonce_changes_keystream() {
    let aead = Morus1280::new(&KEY);
    let msg = message(96);
    let mut other = NONCE;
    other[15] ^= 0x01;

    let c1 = aead.seal(&NONCE, &msg, b"");
    let c2 = aead.seal(&other, &msg, b"");
    assert_ne!(c1[..96], c2[..96]);
}

#[test]
fn test_empty_message_still_authenticates() {
    let aead = Morus1280::new(&KEY);
    let sealed = aead.seal(&NONCE, b"", b"only ad");
    assert_eq!(sealed.len(), TAG_SIZE);
    assert_eq!(aead.open(&NONCE, &sealed, b"only ad").unwrap(), b"");
    assert!(aead.open(&NONCE, &sealed, b"other ad").is_err());
}

// =============================================================================
// ERASURE
// =============================================================================

#[test]
fn test_failed_open_detached_zeroes_buffer() {
    let aead = Morus1280::new(&KEY);
    for len in [1usize, 31, 32, 33, 200] {
        let mut buf = message(len);
        let mut tag = aead.seal_detached(&NONCE, b"", &mut buf);
        tag[0] ^= 1;
        assert!(aead.open_detached(&NONCE, b"", &mut buf, &tag).is_err());
        assert!(buf.iter().all(|&b| b == 0), "Plaintext leaked at len {len}");
    }
}

#[test]
fn test_failed_open_append_leaves_dst_untouched() {
    let aead = Morus1280::new(&KEY);
    let mut sealed = aead.seal(&NONCE, &message(50), b"");
    sealed[0] ^= 1;

    let mut dst = b"existing".to_vec();
    assert!(aead.open_append(&mut dst, &NONCE, &sealed, b"").is_err());
    assert_eq!(dst, b"existing");
}

#[test]
fn test_burn_helpers() {
    let mut bytes = [0xAAu8; 67];
    morus::erase::burn_bytes(&mut bytes);
    assert!(bytes.iter().all(|&b| b == 0));

    let mut words = [u64::MAX; 20];
    morus::erase::burn_words(&mut words);
    assert!(words.iter().all(|&w| w == 0));
}
