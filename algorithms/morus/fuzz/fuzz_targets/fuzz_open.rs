#![no_main]

use libfuzzer_sys::fuzz_target;
use morus::Morus1280;

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // PREPARATION
    // =============================================================================

    // First 16 bytes pick the nonce, the rest is an untrusted sealed message
    let mut nonce = [0u8; 16];
    let split = data.len().min(16);
    nonce[..split].copy_from_slice(&data[..split]);
    let sealed = &data[split..];

    let aead = Morus1280::new(&[0x77u8; 32]);

    // =============================================================================
    // 1. OPEN ARBITRARY INPUT
    // =============================================================================

    // Forged input must never verify, and must never panic
    assert!(
        aead.open(&nonce, sealed, b"").is_err(),
        "Arbitrary input authenticated"
    );

    // =============================================================================
    // 2. IN-PLACE FAILURE LEAVES NOTHING BEHIND
    // =============================================================================

    let mut buf = sealed.to_vec();
    if aead.open_in_place(&nonce, b"", &mut buf).is_err() && sealed.len() >= 16 {
        assert!(buf.is_empty(), "Failed open left plaintext in buffer");
    }
});
