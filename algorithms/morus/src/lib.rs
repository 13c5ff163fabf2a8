#![cfg_attr(not(feature = "std"), no_std)]

//! # MORUS
//!
//! MORUS-1280-256 authenticated encryption with associated data.
//! Accelerated by AVX2 when the CPU supports it, bit-identical portable fallback otherwise.

//! # Usage
//! ```rust
//! use morus::Morus1280;
//!
//! let key = [0x42u8; morus::KEY_SIZE];
//! let nonce = [0x24u8; morus::NONCE_SIZE];
//! let aead = Morus1280::new(&key);
//!
//! // 1. Seal (ciphertext || tag)
//! let sealed = aead.seal(&nonce, b"Performance Matters", b"header");
//! assert_eq!(sealed.len(), 19 + morus::TAG_SIZE);
//!
//! // 2. Open (verified)
//! let opened = aead.open(&nonce, &sealed, b"header")?;
//! assert_eq!(opened, b"Performance Matters");
//!
//! // 3. In place (reuse the buffer's storage)
//! let mut buffer = b"Chunk 1".to_vec();
//! aead.seal_in_place(&nonce, b"", &mut buffer);
//! aead.open_in_place(&nonce, b"", &mut buffer)?;
//! assert_eq!(buffer, b"Chunk 1");
//! # Ok::<(), morus::AuthenticationFailed>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod aead_impl;
mod engine;
pub mod erase;
// Re-export internal kernels for benchmarking/testing if needed, but hide from docs
#[doc(hidden)]
pub mod kernels; // Public for test/bench use only
#[cfg(feature = "aead-trait")]
mod rustcrypto;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use aead_impl::Morus1280;
#[cfg(feature = "aead-trait")]
pub use aead;
pub use kernels::constants::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};
pub use types::{AuthenticationFailed, InvalidKeySize, InvalidNonceSize};

/// Revision of the MORUS specification implemented by this crate.
pub const VERSION: &str = "2.0";

/// Returns `true` if seal/open run on a hardware-accelerated engine (AVX2).
#[must_use]
pub fn is_hardware_accelerated() -> bool {
    engine::backend().accelerated
}

/// Returns the name of the engine currently in use.
#[must_use]
pub fn active_backend() -> &'static str {
    engine::backend().name
}

/// Pins the process to the portable engine, regardless of CPU capability.
///
/// Intended for testing and for hosts where the accelerated path must be
/// avoided. Takes effect for every subsequent seal/open call.
pub fn force_portable() {
    engine::dispatcher::force_portable();
}
