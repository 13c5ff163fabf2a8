//! AVX2 State Management
//!
//! Defines `Avx2State` (one YMM register per row) and its conversion to and
//! from the shared [`State`] layout.

use crate::kernels::constants::{LANES, NUM_ROWS};
use crate::kernels::State;

use core::arch::x86_64::{__m256i, _mm256_loadu_si256, _mm256_setzero_si256, _mm256_storeu_si256};

// =============================================================================
// AVX2 STATE
// =============================================================================

/// AVX2 State (5 x 256-bit YMM registers).
///
/// Lane `j` of `rows[r]` (bits `64j..64j+63`) is word `4r + j` of [`State`].
#[repr(align(32))]
pub struct Avx2State {
    pub(crate) rows: [__m256i; NUM_ROWS],
}

impl Avx2State {
    /// Load the shared state into registers.
    // SAFETY: Requires AVX2 (enforced by dispatcher). Each load reads 4 words
    // inside the 20-word array.
    #[target_feature(enable = "avx2")]
    #[allow(unsafe_code)]
    #[inline]
    pub unsafe fn load(st: &State) -> Self {
        let p = st.s.as_ptr();
        Self {
            rows: [
                _mm256_loadu_si256(p.cast()),
                _mm256_loadu_si256(p.add(LANES).cast()),
                _mm256_loadu_si256(p.add(2 * LANES).cast()),
                _mm256_loadu_si256(p.add(3 * LANES).cast()),
                _mm256_loadu_si256(p.add(4 * LANES).cast()),
            ],
        }
    }

    /// Write registers back to the shared state and wipe the register copy.
    // SAFETY: Requires AVX2 (enforced by dispatcher). Each store writes 4 words
    // inside the 20-word array.
    #[target_feature(enable = "avx2")]
    #[allow(unsafe_code)]
    #[inline]
    pub unsafe fn store(mut self, st: &mut State) {
        let p = st.s.as_mut_ptr();
        for (r, row) in self.rows.iter().enumerate() {
            _mm256_storeu_si256(p.add(r * LANES).cast(), *row);
        }
        self.wipe();
    }

    /// Overwrite the register copy with zeros (volatile, not elided).
    // SAFETY: Requires AVX2. `self.rows` is a valid, aligned place.
    #[target_feature(enable = "avx2")]
    #[allow(unsafe_code)]
    #[inline]
    pub unsafe fn wipe(&mut self) {
        let zero = _mm256_setzero_si256();
        core::ptr::write_volatile(&mut self.rows, [zero; NUM_ROWS]);
        core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
    }
}
