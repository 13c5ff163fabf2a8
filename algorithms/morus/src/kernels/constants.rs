//! MORUS-1280-256 Kernel Constants
//!
//! Rotation amounts, round counts and the initialization constants.
//!
//! The initialization constants are the 32-byte table fixed by the MORUS
//! designers (the first 32 Fibonacci numbers mod 256), read as four
//! little-endian 64-bit words.
//!
//! All multi-byte integers in MORUS are little-endian. The formal algorithm
//! description leaves byte order open; changing it breaks interoperability
//! with every existing ciphertext.

// =============================================================================
// PARAMETER SET
// =============================================================================

/// Key size in bytes (256-bit key).
pub const KEY_SIZE: usize = 32;

/// Nonce size in bytes (128-bit nonce).
pub const NONCE_SIZE: usize = 16;

/// Authentication tag size in bytes (128-bit tag).
pub const TAG_SIZE: usize = 16;

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// Message block size in bytes (256 bits).
pub const BLOCK_SIZE: usize = 32;

/// Number of state rows.
pub const NUM_ROWS: usize = 5;

/// 64-bit lanes per row.
pub const LANES: usize = 4;

/// Total number of 64-bit words in the state (1280 bits).
pub const STATE_WORDS: usize = NUM_ROWS * LANES;

// =============================================================================
// ROUNDS
// =============================================================================

/// Blind permutations during initialization.
pub const INIT_ROUNDS: usize = 16;

/// Permutations over the length block during finalization.
pub const FINALIZE_ROUNDS: usize = 10;

/// Per-pass left rotation amounts (b0..b4).
pub const ROTATIONS: [u32; NUM_ROWS] = [13, 46, 38, 7, 4];

// =============================================================================
// INITIALIZATION CONSTANTS
// =============================================================================

/// Raw initialization constant table (const0 || const1).
pub const INIT_CONSTANT_BYTES: [u8; 32] = [
    0x00, 0x01, 0x01, 0x02, 0x03, 0x05, 0x08, 0x0d, 0x15, 0x22, 0x37, 0x59, 0x90, 0xe9, 0x79, 0x62,
    0xdb, 0x3d, 0x18, 0x55, 0x6d, 0xc2, 0x2f, 0xf1, 0x20, 0x11, 0x31, 0x42, 0x73, 0xb5, 0x28, 0xdd,
];

/// Row 4 initial content, derived from `INIT_CONSTANT_BYTES` at compile time.
pub const INIT_CONSTANTS: [u64; LANES] = words_le(&INIT_CONSTANT_BYTES);

/// Interpret a 32-byte block as four little-endian 64-bit words.
#[must_use]
pub const fn words_le(block: &[u8; BLOCK_SIZE]) -> [u64; LANES] {
    let mut words = [0u64; LANES];
    let mut i = 0;
    while i < LANES {
        let mut w = [0u8; 8];
        let mut j = 0;
        while j < 8 {
            w[j] = block[i * 8 + j];
            j += 1;
        }
        words[i] = u64::from_le_bytes(w);
        i += 1;
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_constants_are_little_endian() {
        assert_eq!(
            INIT_CONSTANTS,
            [
                0x0d08_0503_0201_0100,
                0x6279_e990_5937_2215,
                0xf12f_c26d_5518_3ddb,
                0xdd28_b573_4231_1120,
            ]
        );
    }
}
