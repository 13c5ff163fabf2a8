use bolero::check;
use morus::Morus1280;

#[test]
fn fuzz_tamper_detection() {
    check!().with_type::<(Vec<u8>, Vec<u8>, u16)>().for_each(|(msg, ad, pos)| {
        let aead = Morus1280::new(&[0x5Cu8; 32]);
        let nonce = [0xC5u8; 16];
        let sealed = aead.seal(&nonce, msg, ad);

        // 1. Ciphertext / tag corruption
        let mut bad = sealed.clone();
        let idx = usize::from(*pos) % bad.len();
        bad[idx] ^= 0x01;
        assert!(
            aead.open(&nonce, &bad, ad).is_err(),
            "open() accepted corrupted ciphertext"
        );

        // 2. Associated data corruption
        if !ad.is_empty() {
            let mut bad_ad = ad.clone();
            let idx = usize::from(*pos) % bad_ad.len();
            bad_ad[idx] ^= 0x80;
            assert!(
                aead.open(&nonce, &sealed, &bad_ad).is_err(),
                "open() accepted corrupted associated data"
            );
        }

        // 3. Truncation
        assert!(
            aead.open(&nonce, &sealed[..sealed.len() - 1], ad).is_err(),
            "open() accepted truncated ciphertext"
        );
    });
}
