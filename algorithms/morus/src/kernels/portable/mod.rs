//! Portable implementation of MORUS-1280-256.
//!
//! Reference engine in plain 64-bit arithmetic. Defines the bit-exact behavior
//! every other engine must reproduce: permutation, init, absorb, encrypt,
//! decrypt and finalize over the shared [`State`] layout.

use self::utils::{keystream, load_block, load_le, store_block, xor_words};
use crate::erase::{burn_bytes, burn_words};
use crate::kernels::constants::{
    BLOCK_SIZE, FINALIZE_ROUNDS, INIT_CONSTANTS, INIT_ROUNDS, KEY_SIZE, LANES, NONCE_SIZE,
    NUM_ROWS, ROTATIONS, STATE_WORDS, TAG_SIZE,
};
use crate::kernels::State;

mod utils;

/// Message input for pass 0, which never absorbs the block.
const NO_MESSAGE: [u64; LANES] = [0; LANES];

// =============================================================================
// PERMUTATION
// =============================================================================

/// One row pass: `s_r = rotl(s_r ^ m ^ s_{r+3} ^ (s_{r+1} & s_{r+2}), b_r)`.
#[inline]
fn mix_row(s: &mut [u64; STATE_WORDS], r: usize, m: &[u64; LANES]) {
    let row = r * LANES;
    let xor = ((r + 3) % NUM_ROWS) * LANES;
    let and_a = ((r + 1) % NUM_ROWS) * LANES;
    let and_b = ((r + 2) % NUM_ROWS) * LANES;
    let rot = ROTATIONS[r];

    for j in 0..LANES {
        let v = s[row + j] ^ m[j] ^ s[xor + j] ^ (s[and_a + j] & s[and_b + j]);
        s[row + j] = v.rotate_left(rot);
    }
}

/// State update with one message block (the MORUS `Update` function).
///
/// Each pass also shuffles the lanes of its XOR partner row:
/// pass 0 -> row 3 rotated right, pass 1 -> row 4 pair swap,
/// pass 2 -> row 0 rotated left, pass 3 -> row 1 pair swap,
/// pass 4 -> row 2 rotated right.
#[inline]
pub fn permute(st: &mut State, m: &[u64; LANES]) {
    let s = &mut st.s;

    mix_row(s, 0, &NO_MESSAGE);
    s[12..16].rotate_right(1);

    mix_row(s, 1, m);
    s[16..20].rotate_left(2);

    mix_row(s, 2, m);
    s[0..4].rotate_left(1);

    mix_row(s, 3, m);
    s[4..8].rotate_left(2);

    mix_row(s, 4, m);
    s[8..12].rotate_right(1);
}

// =============================================================================
// INITIALIZATION
// =============================================================================

/// Load key and nonce, then run the 16 blind permutations.
pub fn init(st: &mut State, key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE]) {
    let mut k = load_block(key);

    {
        let s = &mut st.s;
        s[0] = load_le(&nonce[0..8]);
        s[1] = load_le(&nonce[8..16]);
        s[2] = 0;
        s[3] = 0;
        s[4..8].copy_from_slice(&k);
        s[8..12].fill(u64::MAX);
        s[12..16].fill(0);
        s[16..20].copy_from_slice(&INIT_CONSTANTS);
    }

    for _ in 0..INIT_ROUNDS {
        permute(st, &NO_MESSAGE);
    }

    for (w, kw) in st.s[4..8].iter_mut().zip(&k) {
        *w ^= kw;
    }

    burn_words(&mut k);
}

// =============================================================================
// ASSOCIATED DATA
// =============================================================================

/// Absorb associated data. The final partial block is zero-padded.
pub fn absorb(st: &mut State, data: &[u8]) {
    let mut chunks = data.chunks_exact(BLOCK_SIZE);
    for chunk in &mut chunks {
        permute(st, &load_block(chunk));
    }

    let rem = chunks.remainder();
    if !rem.is_empty() {
        let mut tmp = [0u8; BLOCK_SIZE];
        tmp[..rem.len()].copy_from_slice(rem);
        permute(st, &load_block(&tmp));
        burn_bytes(&mut tmp);
    }
}

// =============================================================================
// ENCRYPTION
// =============================================================================

/// Encrypt one full block in place. The keystream is taken before the update,
/// and the update absorbs the plaintext.
#[inline]
fn encrypt_block(st: &mut State, block: &mut [u8]) {
    let mut m = load_block(block);
    let c = xor_words(&m, &keystream(&st.s));
    permute(st, &m);
    store_block(block, &c);
    burn_words(&mut m);
}

/// Encrypt `buf` in place.
pub fn encrypt(st: &mut State, buf: &mut [u8]) {
    let mut chunks = buf.chunks_exact_mut(BLOCK_SIZE);
    for chunk in &mut chunks {
        encrypt_block(st, chunk);
    }

    let rem = chunks.into_remainder();
    if !rem.is_empty() {
        let n = rem.len();
        let mut tmp = [0u8; BLOCK_SIZE];
        tmp[..n].copy_from_slice(rem);
        encrypt_block(st, &mut tmp);
        rem.copy_from_slice(&tmp[..n]);
        burn_bytes(&mut tmp);
    }
}

// =============================================================================
// DECRYPTION
// =============================================================================

/// Decrypt one full block in place. The recovered plaintext drives the update.
#[inline]
fn decrypt_block(st: &mut State, block: &mut [u8]) {
    let mut m = xor_words(&load_block(block), &keystream(&st.s));
    store_block(block, &m);
    permute(st, &m);
    burn_words(&mut m);
}

/// Decrypt `buf` in place.
pub fn decrypt(st: &mut State, buf: &mut [u8]) {
    let mut chunks = buf.chunks_exact_mut(BLOCK_SIZE);
    for chunk in &mut chunks {
        decrypt_block(st, chunk);
    }

    let rem = chunks.into_remainder();
    if !rem.is_empty() {
        let n = rem.len();
        let mut tmp = [0u8; BLOCK_SIZE];
        tmp[..n].copy_from_slice(rem);

        let mut m = xor_words(&load_block(&tmp), &keystream(&st.s));
        store_block(&mut tmp, &m);
        // Bytes past `n` hold keystream, not plaintext; the update sees zeros.
        burn_bytes(&mut tmp[n..]);
        rem.copy_from_slice(&tmp[..n]);

        m = load_block(&tmp);
        permute(st, &m);

        burn_words(&mut m);
        burn_bytes(&mut tmp);
    }
}

// =============================================================================
// FINALIZATION
// =============================================================================

/// Bind the lengths (in bits) and squeeze the 128-bit tag.
pub fn finalize(st: &mut State, msg_len: u64, ad_len: u64, tag: &mut [u8; TAG_SIZE]) {
    let lengths = [ad_len << 3, msg_len << 3, 0, 0];

    for j in 0..LANES {
        st.s[16 + j] ^= st.s[j];
    }

    for _ in 0..FINALIZE_ROUNDS {
        permute(st, &lengths);
    }

    let mut t = keystream(&st.s);
    tag[0..8].copy_from_slice(&t[0].to_le_bytes());
    tag[8..16].copy_from_slice(&t[1].to_le_bytes());
    burn_words(&mut t);
}

// =============================================================================
// ONE-SHOT
// =============================================================================

/// Seal `buf` in place with the portable engine and return the tag.
///
/// Bypasses the dispatcher; used as the reference in cross-engine tests and
/// benchmarks.
pub fn seal(
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
