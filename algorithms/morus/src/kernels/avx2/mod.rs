//! AVX2 Kernel Module
//!
//! MORUS-1280-256 with each state row held in one 256-bit YMM register.
//! Reads and writes the shared [`State`](crate::kernels::State) layout, so it
//! is interchangeable with the portable engine at any operation boundary.

mod compress;
mod finalize;
mod state;

// Re-export public API
pub use compress::{absorb, decrypt, encrypt};
pub use finalize::{finalize, init, seal};
pub use state::Avx2State;
