//! AVX2 Initialization and Finalization
//!
//! Key/nonce loading with the blind permutations, and the length-bound tag
//! derivation.

#![allow(clippy::cast_possible_wrap)]

use super::compress::{absorb, encrypt, keystream, update};
use super::state::Avx2State;
use crate::erase::burn_bytes;
use crate::kernels::constants::{
    BLOCK_SIZE, FINALIZE_ROUNDS, INIT_CONSTANTS, INIT_ROUNDS, KEY_SIZE, NONCE_SIZE, TAG_SIZE,
};
use crate::kernels::State;

use core::arch::x86_64::{
    _mm256_loadu_si256, _mm256_set1_epi64x, _mm256_set_epi64x, _mm256_setzero_si256,
    _mm256_storeu_si256, _mm256_xor_si256,
};

// =============================================================================
// INITIALIZATION
// =============================================================================

/// Load key and nonce, then run the 16 blind permutations.
// SAFETY: Requires AVX2 (enforced by dispatcher). Loads read exactly the
// 32-byte key, the local nonce block and the 4-word constant table.
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
pub unsafe fn init(st: &mut State, key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE]) {
    let mut iv = [0u8; BLOCK_SIZE];
    iv[..NONCE_SIZE].copy_from_slice(nonce);

    let k = _mm256_loadu_si256(key.as_ptr().cast());
    let mut v = Avx2State {
        rows: [
            _mm256_loadu_si256(iv.as_ptr().cast()),
            k,
            _mm256_set1_epi64x(-1),
            _mm256_setzero_si256(),
            _mm256_loadu_si256(INIT_CONSTANTS.as_ptr().cast()),
        ],
    };
    burn_bytes(&mut iv);

    let zero = _mm256_setzero_si256();
    for _ in 0..INIT_ROUNDS {
        update(&mut v, zero);
    }
    v.rows[1] = _mm256_xor_si256(v.rows[1], k);

    v.store(st);
}

// =============================================================================
// FINALIZATION
// =============================================================================

/// Bind the lengths (in bits) and squeeze the 128-bit tag.
// SAFETY: Requires AVX2 (enforced by dispatcher). The only store targets the
// local 32-byte scratch block.
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
pub unsafe fn finalize(st: &mut State, msg_len: u64, ad_len: u64, tag: &mut [u8; TAG_SIZE]) {
    let mut v = Avx2State::load(st);

    let lengths = _mm256_set_epi64x(0, 0, (msg_len << 3) as i64, (ad_len << 3) as i64);
    v.rows[4] = _mm256_xor_si256(v.rows[4], v.rows[0]);

    for _ in 0..FINALIZE_ROUNDS {
        update(&mut v, lengths);
    }

    let mut out = [0u8; BLOCK_SIZE];
    _mm256_storeu_si256(out.as_mut_ptr().cast(), keystream(&v));
    tag.copy_from_slice(&out[..TAG_SIZE]);
    burn_bytes(&mut out);

    v.store(st);
}

// =============================================================================
// ONE-SHOT
// =============================================================================

/// Seal `buf` in place with the AVX2 engine and return the tag.
///
/// Bypasses the dispatcher; used in cross-engine tests and benchmarks.
// SAFETY: Requires AVX2. Caller must verify CPU support first.
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
pub unsafe fn seal(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    ad: &[u8],
    buf: &mut [u8],
) -> [u8; TAG_SIZE] {
    let mut st = State::new();
    let mut tag = [0u8; TAG_SIZE];
    init(&mut st, key, nonce);
    absorb(&mut st, ad);
    encrypt(&mut st, buf);
    finalize(&mut st, buf.len() as u64, ad.len() as u64, &mut tag);
    tag
}
