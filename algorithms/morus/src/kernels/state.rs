//! Shared Cipher State
//!
//! The 1280-bit MORUS state as 20 little-endian-significant 64-bit words.
//! Word `4 * r + j` is lane `j` of row `r`. Every engine reads and writes this
//! exact layout, so a state produced by one engine can be continued by another.

use super::constants::{LANES, NUM_ROWS, STATE_WORDS};
use zeroize::{Zeroize, ZeroizeOnDrop};

// =============================================================================
// STATE
// =============================================================================

/// MORUS-1280 internal state (5 rows x 4 lanes).
///
/// Zeroized on drop, so unwinding out of a seal/open call still erases it.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
#[repr(C, align(32))]
pub struct State {
    pub(crate) s: [u64; STATE_WORDS],
}

impl State {
    /// All-zero (uninitialized) state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            s: [0u64; STATE_WORDS],
        }
    }

    /// Snapshot of the linear state content.
    #[must_use]
    pub const fn words(&self) -> &[u64; STATE_WORDS] {
        &self.s
    }

    /// Lanes of row `r`.
    #[must_use]
    pub fn row(&self, r: usize) -> [u64; LANES] {
        debug_assert!(r < NUM_ROWS);
        let mut out = [0u64; LANES];
        out.copy_from_slice(&self.s[r * LANES..(r + 1) * LANES]);
        out
    }

    /// `true` once every word has been erased.
    #[must_use]
    pub fn is_erased(&self) -> bool {
        self.s.iter().fold(0u64, |acc, w| acc | w) == 0
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for State {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("State").finish_non_exhaustive()
    }
}
