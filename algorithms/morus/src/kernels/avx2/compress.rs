//! AVX2 Update and Block Processing
//!
//! The MORUS state update with each row in one YMM register, plus the
//! absorb / encrypt / decrypt loops built on it.

use super::state::Avx2State;
use crate::erase::burn_bytes;
use crate::kernels::constants::BLOCK_SIZE;
use crate::kernels::State;

use core::arch::x86_64::{
    __m256i, _mm256_and_si256, _mm256_loadu_si256, _mm256_or_si256, _mm256_permute4x64_epi64,
    _mm256_slli_epi64, _mm256_srli_epi64, _mm256_storeu_si256, _mm256_xor_si256,
};

/// `[0xFF; 32] || [0x00; 32]`: a 32-byte load at offset `32 - n` keeps the first `n` bytes.
static PARTIAL_MASK: [u8; 2 * BLOCK_SIZE] = {
    let mut m = [0u8; 2 * BLOCK_SIZE];
    let mut i = 0;
    while i < BLOCK_SIZE {
        m[i] = 0xFF;
        i += 1;
    }
    m
};

// Lane shuffles (`_mm256_permute4x64_epi64` immediates).
/// new = [old3, old0, old1, old2]
const ROT_RIGHT_1: i32 = 0x93;
/// new = [old2, old3, old0, old1]
const SWAP_PAIRS: i32 = 0x4E;
/// new = [old1, old2, old3, old0]
const ROT_LEFT_1: i32 = 0x39;

// =============================================================================
// PRIMITIVES
// =============================================================================

/// Per-lane 64-bit rotate left by `L` (`R` = 64 - `L`).
// SAFETY: Requires AVX2 (enforced by dispatcher). Register-only.
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
#[inline]
unsafe fn rotl<const L: i32, const R: i32>(x: __m256i) -> __m256i {
    _mm256_or_si256(_mm256_slli_epi64::<L>(x), _mm256_srli_epi64::<R>(x))
}

/// `a ^ b ^ (c & d)`
// SAFETY: Requires AVX2 (enforced by dispatcher). Register-only.
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
#[inline]
unsafe fn mix(a: __m256i, b: __m256i, c: __m256i, d: __m256i) -> __m256i {
    _mm256_xor_si256(_mm256_xor_si256(a, b), _mm256_and_si256(c, d))
}

/// Keystream: `s0 ^ (s1 lanes rotated left by one) ^ (s2 & s3)`.
// SAFETY: Requires AVX2 (enforced by dispatcher). Register-only.
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
#[inline]
pub(crate) unsafe fn keystream(st: &Avx2State) -> __m256i {
    let [s0, s1, s2, s3, _] = st.rows;
    mix(s0, _mm256_permute4x64_epi64::<ROT_LEFT_1>(s1), s2, s3)
}

/// State update with message block `m`.
// SAFETY: Requires AVX2 (enforced by dispatcher). Register-only.
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
#[inline]
pub(crate) unsafe fn update(st: &mut Avx2State, m: __m256i) {
    let [mut s0, mut s1, mut s2, mut s3, mut s4] = st.rows;

    s0 = rotl::<13, 51>(mix(s0, s3, s1, s2));
    s3 = _mm256_permute4x64_epi64::<ROT_RIGHT_1>(s3);

    s1 = rotl::<46, 18>(mix(_mm256_xor_si256(s1, m), s4, s2, s3));
    s4 = _mm256_permute4x64_epi64::<SWAP_PAIRS>(s4);

    s2 = rotl::<38, 26>(mix(_mm256_xor_si256(s2, m), s0, s3, s4));
    s0 = _mm256_permute4x64_epi64::<ROT_LEFT_1>(s0);

    s3 = rotl::<7, 57>(mix(_mm256_xor_si256(s3, m), s1, s4, s0));
    s1 = _mm256_permute4x64_epi64::<SWAP_PAIRS>(s1);

    s4 = rotl::<4, 60>(mix(_mm256_xor_si256(s4, m), s2, s0, s1));
    s2 = _mm256_permute4x64_epi64::<ROT_RIGHT_1>(s2);

    st.rows = [s0, s1, s2, s3, s4];
}

/// Load a zero-padded copy of a short tail (1..31 bytes) into `tmp`.
#[inline]
fn pad_into(tmp: &mut [u8; BLOCK_SIZE], tail: &[u8]) {
    tmp[..tail.len()].copy_from_slice(tail);
}

// =============================================================================
// ASSOCIATED DATA
// =============================================================================

/// Absorb associated data.
// SAFETY: Requires AVX2 (enforced by dispatcher). Loads only touch 32-byte
// chunks of `data` or the local scratch block.
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
pub unsafe fn absorb(st: &mut State, data: &[u8]) {
    if data.is_empty() {
        return;
    }
    let mut v = Avx2State::load(st);

    let mut chunks = data.chunks_exact(BLOCK_SIZE);
    for chunk in &mut chunks {
        update(&mut v, _mm256_loadu_si256(chunk.as_ptr().cast()));
    }

    let rem = chunks.remainder();
    if !rem.is_empty() {
        let mut tmp = [0u8; BLOCK_SIZE];
        pad_into(&mut tmp, rem);
        update(&mut v, _mm256_loadu_si256(tmp.as_ptr().cast()));
        burn_bytes(&mut tmp);
    }

    v.store(st);
}

// =============================================================================
// ENCRYPTION
// =============================================================================

/// Encrypt `buf` in place.
// SAFETY: Requires AVX2 (enforced by dispatcher). Full-block loads/stores stay
// inside 32-byte chunks of `buf`; the tail goes through a local scratch block.
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
pub unsafe fn encrypt(st: &mut State, buf: &mut [u8]) {
    if buf.is_empty() {
        return;
    }
    let mut v = Avx2State::load(st);

    let mut chunks = buf.chunks_exact_mut(BLOCK_SIZE);
    for chunk in &mut chunks {
        let m = _mm256_loadu_si256(chunk.as_ptr().cast());
        let c = _mm256_xor_si256(m, keystream(&v));
        _mm256_storeu_si256(chunk.as_mut_ptr().cast(), c);
        update(&mut v, m);
    }

    let rem = chunks.into_remainder();
    if !rem.is_empty() {
        let n = rem.len();
        let mut tmp = [0u8; BLOCK_SIZE];
        pad_into(&mut tmp, rem);
        let m = _mm256_loadu_si256(tmp.as_ptr().cast());
        _mm256_storeu_si256(tmp.as_mut_ptr().cast(), _mm256_xor_si256(m, keystream(&v)));
        rem.copy_from_slice(&tmp[..n]);
        update(&mut v, m);
        burn_bytes(&mut tmp);
    }

    v.store(st);
}

// =============================================================================
// DECRYPTION
// =============================================================================

/// Decrypt `buf` in place.
// SAFETY: Requires AVX2 (enforced by dispatcher). Full-block loads/stores stay
// inside 32-byte chunks of `buf`; the tail goes through a local scratch block
// and the mask load stays inside `PARTIAL_MASK` (offset 1..=31, 32 bytes).
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
pub unsafe fn decrypt(st: &mut State, buf: &mut [u8]) {
    if buf.is_empty() {
        return;
    }
    let mut v = Avx2State::load(st);

    let mut chunks = buf.chunks_exact_mut(BLOCK_SIZE);
    for chunk in &mut chunks {
        let c = _mm256_loadu_si256(chunk.as_ptr().cast());
        let m = _mm256_xor_si256(c, keystream(&v));
        _mm256_storeu_si256(chunk.as_mut_ptr().cast(), m);
        update(&mut v, m);
    }

    let rem = chunks.into_remainder();
    if !rem.is_empty() {
        let n = rem.len();
        let mut tmp = [0u8; BLOCK_SIZE];
        pad_into(&mut tmp, rem);
        let c = _mm256_loadu_si256(tmp.as_ptr().cast());
        // Drop the keystream bytes that landed in the padding.
        let mask = _mm256_loadu_si256(PARTIAL_MASK.as_ptr().add(BLOCK_SIZE - n).cast());
        let m = _mm256_and_si256(_mm256_xor_si256(c, keystream(&v)), mask);
        _mm256_storeu_si256(tmp.as_mut_ptr().cast(), m);
        rem.copy_from_slice(&tmp[..n]);
        update(&mut v, m);
        burn_bytes(&mut tmp);
    }

    v.store(st);
}
