//! Kernel Dispatcher
//!
//! Contains the MORUS-1280-256 engines: the portable reference and the AVX2 engine.
//! Both operate on the shared [`State`] layout and are bit-identical.

#[cfg(target_arch = "x86_64")]
pub mod avx2;
pub mod constants;
pub mod portable;
mod state;

pub use state::State;
