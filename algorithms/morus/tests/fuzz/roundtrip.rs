use bolero::check;
use morus::Morus1280;

/// Splits fuzz input into key, nonce, associated data and message.
fn split(data: &[u8]) -> ([u8; 32], [u8; 16], &[u8], &[u8]) {
    let mut key = [0u8; 32];
    let mut nonce = [0u8; 16];
    let k = data.len().min(32);
    key[..k].copy_from_slice(&data[..k]);
    let rest = &data[k..];
    let n = rest.len().min(16);
    nonce[..n].copy_from_slice(&rest[..n]);
    let rest = &rest[n..];
    let ad_len = rest.first().map_or(0, |&b| usize::from(b)).min(rest.len());
    let (ad, msg) = rest.split_at(ad_len);
    (key, nonce, ad, msg)
}

#[test]
fn fuzz_roundtrip() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        let (key, nonce, ad, msg) = split(data);
        let aead = Morus1280::new(&key);

        // =============================================================================
        // ALLOCATING
        // =============================================================================

        let sealed = aead.seal(&nonce, msg, ad);
        assert_eq!(sealed.len(), msg.len() + morus::TAG_SIZE);
        let opened = aead.open(&nonce, &sealed, ad).expect("open failed on sealed data");
        assert_eq!(opened, msg, "Round-trip mismatch");

        // =============================================================================
        // IN PLACE
        // =============================================================================

        let mut buf = msg.to_vec();
        aead.seal_in_place(&nonce, ad, &mut buf);
        assert_eq!(buf, sealed, "seal_in_place differs from seal");
        aead.open_in_place(&nonce, ad, &mut buf)
            .expect("open_in_place failed on sealed data");
        assert_eq!(buf, msg, "In-place round-trip mismatch");
    });
}
