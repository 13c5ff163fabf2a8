//! Generator for MORUS test vectors
//!
//! Generates the JSON test vectors used by `tests/test_vectors.json`.
//! Covers the empty message, associated-data-only inputs, and every block
//! boundary around the 32-byte rate.
#![allow(clippy::unwrap_used)]
#![allow(clippy::cast_possible_truncation)]
use morus::Morus1280;
use serde_json::json;

/// `(i * mul + add) mod 256` for `i` in `0..len`.
fn pattern(len: usize, mul: usize, add: usize) -> Vec<u8> {
    (0..len).map(|i| (i * mul + add) as u8).collect()
}

fn main() {
    let mut vectors = Vec::new();

    // =========================================================================
    // 1. ALL-ZERO KEY AND NONCE
    // =========================================================================

    let sealed = Morus1280::new(&[0u8; 32]).seal(&[0u8; 16], b"", b"");
    vectors.push(json!({
        "name": "all_zero",
        "source": "regression",
        "key": hex::encode([0u8; 32]),
        "nonce": hex::encode([0u8; 16]),
        "ad": "",
        "plaintext": "",
        "ciphertext": "",
        "tag": hex::encode(&sealed)
    }));

    // =========================================================================
    // 2. BOUNDARY CONDITIONS
    // =========================================================================

    // (name, message length, associated data length)
    let cases: [(&str, usize, usize); 18] = [
        ("empty", 0, 0),
        ("ad_only_1", 0, 1),
        ("ad_only_32", 0, 32),
        ("msg_1", 1, 0),
        ("msg_15", 15, 0),
        ("msg_16", 16, 0),
        ("msg_31", 31, 0),
        ("msg_32", 32, 0),
        ("msg_33", 33, 0),
        ("msg_63", 63, 0),
        ("msg_64", 64, 0),
        ("msg_65", 65, 0),
        ("mixed_7_13", 7, 13),
        ("mixed_32_32", 32, 32),
        ("mixed_100_45", 100, 45),
        ("mixed_255_33", 255, 33),
        ("mixed_1000_31", 1000, 31),
        ("large_4096_64", 4096, 64),
    ];

    for (idx, (name, m_len, a_len)) in cases.into_iter().enumerate() {
        let key: [u8; 32] = pattern(32, 1, idx).try_into().unwrap();
        let nonce: [u8; 16] = pattern(16, 3, 0xA0 + idx).try_into().unwrap();
        let msg = pattern(m_len, 7, 3);
        let ad = pattern(a_len, 11, 5);

        let sealed = Morus1280::new(&key).seal(&nonce, &msg, &ad);
        let (ct, tag) = sealed.split_at(m_len);
        vectors.push(json!({
            "name": name,
            "source": "regression",
            "key": hex::encode(key),
            "nonce": hex::encode(nonce),
            "ad": hex::encode(&ad),
            "plaintext": hex::encode(&msg),
            "ciphertext": hex::encode(ct),
            "tag": hex::encode(tag)
        }));
    }

    let output = json!({
        "algorithm": "MORUS-1280-256",
        "version": morus::VERSION,
        "vectors": vectors
    });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
