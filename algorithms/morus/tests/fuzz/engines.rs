use bolero::check;
use morus::kernels;

#[test]
fn fuzz_engine_equivalence() {
    #[cfg(target_arch = "x86_64")]
    let avx2 = is_x86_feature_detected!("avx") && is_x86_feature_detected!("avx2");

    check!().with_type::<(Vec<u8>, Vec<u8>)>().for_each(|(msg, ad)| {
        let key = [0x01u8; 32];
        let nonce = [0x02u8; 16];

        let mut portable = msg.clone();
        let tag_p = kernels::portable::seal(&key, &nonce, ad, &mut portable);

        #[cfg(target_arch = "x86_64")]
        if avx2 {
            let mut accel = msg.clone();
            #[allow(unsafe_code)]
            // SAFETY: AVX2 support checked above.
            let tag_a = unsafe { kernels::avx2::seal(&key, &nonce, ad, &mut accel) };
            assert_eq!(portable, accel, "Ciphertext differs between engines");
            assert_eq!(tag_p, tag_a, "Tag differs between engines");
        }

        let mut st = kernels::State::new();
        kernels::portable::init(&mut st, &key, &nonce);
        kernels::portable::absorb(&mut st, ad);
        kernels::portable::decrypt(&mut st, &mut portable);
        assert_eq!(&portable, msg, "Portable decrypt mismatch");
    });
}
