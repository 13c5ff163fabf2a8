#![no_main]

use libfuzzer_sys::fuzz_target;
use morus::Morus1280;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte picks how much of the input is associated data
    let ad_len = (data[0] as usize).min(data.len() - 1);
    let (ad, msg) = data[1..].split_at(ad_len);

    let key = [data[0]; 32];
    let nonce = [data[0].wrapping_add(1); 16];
    let aead = Morus1280::new(&key);

    let sealed = aead.seal(&nonce, msg, ad);
    let opened = aead.open(&nonce, &sealed, ad).unwrap();

    // They must be identical
    assert_eq!(opened, msg, "Round-trip mismatch");
});
