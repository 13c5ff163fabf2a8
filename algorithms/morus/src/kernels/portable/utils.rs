//! Portable helpers: little-endian word I/O and the keystream combiner.

use crate::kernels::constants::{BLOCK_SIZE, LANES, STATE_WORDS};

// =============================================================================
// WORD I/O
// =============================================================================

/// Load one little-endian 64-bit word from the first 8 bytes of `bytes`.
#[inline]
pub fn load_le(bytes: &[u8]) -> u64 {
    let mut w = [0u8; 8];
    w.copy_from_slice(&bytes[..8]);
    u64::from_le_bytes(w)
}

/// Load a 32-byte block as four little-endian words.
#[inline]
pub fn load_block(block: &[u8]) -> [u64; LANES] {
    debug_assert!(block.len() >= BLOCK_SIZE);
    [
        load_le(&block[0..8]),
        load_le(&block[8..16]),
        load_le(&block[16..24]),
        load_le(&block[24..32]),
    ]
}

/// Store four words little-endian into a 32-byte block.
#[inline]
pub fn store_block(block: &mut [u8], words: &[u64; LANES]) {
    debug_assert!(block.len() >= BLOCK_SIZE);
    for (dst, w) in block.chunks_exact_mut(8).zip(words) {
        dst.copy_from_slice(&w.to_le_bytes());
    }
}

// =============================================================================
// KEYSTREAM
// =============================================================================

/// Keystream word `j` = `s0[j] ^ s1[j+1 mod 4] ^ (s2[j] & s3[j])`.
///
/// Row 1 enters rotated by one lane, so word 3 pairs with lane 4 of the state.
#[inline]
pub fn keystream(s: &[u64; STATE_WORDS]) -> [u64; LANES] {
    [
        s[0] ^ s[5] ^ (s[8] & s[12]),
        s[1] ^ s[6] ^ (s[9] & s[13]),
        s[2] ^ s[7] ^ (s[10] & s[14]),
        s[3] ^ s[4] ^ (s[11] & s[15]),
    ]
}

/// Lane-wise XOR of two blocks of words.
#[inline]
pub fn xor_words(a: &[u64; LANES], b: &[u64; LANES]) -> [u64; LANES] {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_io_is_little_endian() {
        let mut block = [0u8; BLOCK_SIZE];
        block[0] = 0x01;
        block[15] = 0x80;
        let w = load_block(&block);
        assert_eq!(w, [1, 0x8000_0000_0000_0000, 0, 0]);

        let mut out = [0xAAu8; BLOCK_SIZE];
        store_block(&mut out, &w);
        assert_eq!(out, block);
    }
}
