//! Secure Erasure
//!
//! Compiler-opaque zeroing of key material, cipher state and scratch blocks.
//! Backed by `zeroize` (volatile writes followed by a compiler fence), so the
//! stores survive dead-store elimination even when the buffer is never read
//! again.

use zeroize::Zeroize;

/// Overwrite a byte buffer with zeros.
#[inline]
pub fn burn_bytes(buf: &mut [u8]) {
    buf.zeroize();
}

/// Overwrite a word buffer with zeros.
#[inline]
pub fn burn_words(buf: &mut [u64]) {
    buf.zeroize();
}
