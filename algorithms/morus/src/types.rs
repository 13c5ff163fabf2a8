//! Shared types used across the MORUS library.

use crate::kernels::constants::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};
use crate::kernels::State;
use core::fmt;
#[cfg(feature = "std")]
use std::error;

// =============================================================================
// KERNEL INTERFACE
// =============================================================================

/// `(state, key, nonce)`: load key and nonce and run the blind rounds.
pub type InitFn = fn(&mut State, &[u8; KEY_SIZE], &[u8; NONCE_SIZE]);

/// `(state, data)`: absorb associated data.
pub type AbsorbFn = fn(&mut State, &[u8]);

/// `(state, buf)`: encrypt or decrypt `buf` in place.
pub type CryptFn = fn(&mut State, &mut [u8]);

/// `(state, msg_len, ad_len, tag)`: bind lengths (bytes) and write the tag.
pub type FinalizeFn = fn(&mut State, u64, u64, &mut [u8; TAG_SIZE]);

/// Engine function table.
///
/// The AVX2 engine and the portable fallback both fill this table so the
/// dispatcher can swap them at runtime.
#[derive(Debug)]
pub struct Backend {
    /// Human-readable engine name.
    pub name: &'static str,
    /// `true` for hardware-accelerated engines.
    pub accelerated: bool,
    /// Initialization.
    pub init: InitFn,
    /// Associated-data absorption.
    pub absorb: AbsorbFn,
    /// In-place encryption.
    pub encrypt: CryptFn,
    /// In-place decryption.
    pub decrypt: CryptFn,
    /// Tag derivation.
    pub finalize: FinalizeFn,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Key passed to [`Morus1280::new_from_slice`](crate::Morus1280::new_from_slice)
/// is not 32 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidKeySize {
    len: usize,
}

impl InvalidKeySize {
    /// Create a new `InvalidKeySize` for a key of `len` bytes.
    pub const fn new(len: usize) -> Self {
        Self { len }
    }

    /// Length of the rejected key.
    pub const fn size(&self) -> usize {
        self.len
    }
}

impl fmt::Display for InvalidKeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "morus: invalid key size ({} bytes, expected {KEY_SIZE})",
            self.len
        )
    }
}

#[cfg(feature = "std")]
impl error::Error for InvalidKeySize {}

/// Nonce is not 16 bytes.
///
/// A precondition violation: seal/open panic with this message, it is never
/// returned as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidNonceSize {
    len: usize,
}

impl InvalidNonceSize {
    /// Create a new `InvalidNonceSize` for a nonce of `len` bytes.
    pub const fn new(len: usize) -> Self {
        Self { len }
    }

    /// Length of the rejected nonce.
    pub const fn size(&self) -> usize {
        self.len
    }
}

impl fmt::Display for InvalidNonceSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "morus: invalid nonce size ({} bytes, expected {NONCE_SIZE})",
            self.len
        )
    }
}

#[cfg(feature = "std")]
impl error::Error for InvalidNonceSize {}

/// Message authentication failed during open.
///
/// Carries no detail: tag mismatch and truncated ciphertext are
/// indistinguishable to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticationFailed;

impl fmt::Display for AuthenticationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("morus: message authentication failed")
    }
}

#[cfg(feature = "std")]
impl error::Error for AuthenticationFailed {}
