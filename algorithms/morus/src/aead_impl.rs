//! Public API Layer
//!
//! [`Morus1280`] owns a copy of the key and runs seal/open on the engine the
//! dispatcher bound for this process. Every call builds a fresh [`State`],
//! drives it through init -> absorb -> encrypt/decrypt -> finalize, and erases
//! it before returning.

use crate::engine;
use crate::erase::burn_bytes;
use crate::kernels::constants::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};
use crate::kernels::State;
use crate::types::{AuthenticationFailed, Backend, InvalidKeySize, InvalidNonceSize};
use core::fmt;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// =============================================================================
// AEAD INSTANCE
// =============================================================================

/// A keyed MORUS-1280-256 instance.
///
/// The key is copied on construction and erased on [`reset`](Self::reset) and
/// on drop. Nonces must be unique per key; reuse breaks confidentiality and
/// authenticity, and is not detectable here.
///
/// # Example
/// ```rust
/// use morus::Morus1280;
///
/// let aead = Morus1280::new(&[7u8; 32]);
/// let nonce = [1u8; 16];
/// let sealed = aead.seal(&nonce, b"attack at dawn", b"v1");
/// assert_eq!(aead.open(&nonce, &sealed, b"v1").unwrap(), b"attack at dawn");
/// assert!(aead.open(&nonce, &sealed, b"v2").is_err());
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Morus1280 {
    key: [u8; KEY_SIZE],
}

impl Morus1280 {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create an instance from a 256-bit key.
    #[must_use]
    pub const fn new(key: &[u8; KEY_SIZE]) -> Self {
        Self { key: *key }
    }

    /// Create an instance from a key slice.
    ///
    /// # Errors
    /// Returns `InvalidKeySize` unless `key` is exactly 32 bytes.
    pub fn new_from_slice(key: &[u8]) -> Result<Self, InvalidKeySize> {
        let key: &[u8; KEY_SIZE] = key
            .try_into()
            .map_err(|_| InvalidKeySize::new(key.len()))?;
        Ok(Self::new(key))
    }

    /// Size of the nonce passed to seal/open, in bytes.
    #[must_use]
    pub const fn nonce_size(&self) -> usize {
        NONCE_SIZE
    }

    /// Difference between ciphertext and plaintext lengths, in bytes.
    #[must_use]
    pub const fn overhead(&self) -> usize {
        TAG_SIZE
    }

    /// Erase the stored key. The instance must not be used afterwards.
    pub fn reset(&mut self) {
        self.key.zeroize();
    }

    // =========================================================================
    // SEAL
    // =========================================================================

    /// Encrypt and authenticate, returning `ciphertext || tag`.
    ///
    /// # Panics
    /// If `nonce` is not 16 bytes.
    #[must_use]
    pub fn seal(&self, nonce: &[u8], plaintext: &[u8], associated_data: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(plaintext.len() + TAG_SIZE);
        self.seal_append(&mut out, nonce, plaintext, associated_data);
        out
    }

    /// Encrypt and authenticate, appending `ciphertext || tag` to `dst`.
    ///
    /// Spare capacity in `dst` is reused; it only reallocates when the
    /// `plaintext.len() + 16` extra bytes do not fit.
    ///
    /// # Panics
    /// If `nonce` is not 16 bytes.
    pub fn seal_append(
        &self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        plaintext: &[u8],
        associated_data: &[u8],
    ) {
        let nonce = check_nonce(nonce);
        let out = slice_for_append(dst, plaintext.len() + TAG_SIZE);
        let (body, tag_out) = out.split_at_mut(plaintext.len());
        body.copy_from_slice(plaintext);
        let tag = self.seal_detached(nonce, associated_data, body);
        tag_out.copy_from_slice(&tag);
    }

    /// Encrypt `buffer` in place and append the tag.
    ///
    /// The ciphertext overwrites the plaintext's own storage; only the tag
    /// may need new capacity.
    ///
    /// # Panics
    /// If `nonce` is not 16 bytes.
    pub fn seal_in_place(&self, nonce: &[u8], associated_data: &[u8], buffer: &mut Vec<u8>) {
        let nonce = check_nonce(nonce);
        let tag = self.seal_detached(nonce, associated_data, buffer);
        // Grown after encryption, so a reallocation only copies ciphertext.
        buffer.extend_from_slice(&tag);
    }

    /// Encrypt `buffer` in place and return the detached tag. Never allocates.
    pub fn seal_detached(
        &self,
        nonce: &[u8; NONCE_SIZE],
        associated_data: &[u8],
        buffer: &mut [u8],
    ) -> [u8; TAG_SIZE] {
        let mut st = State::new();
        seal_with(
            engine::backend(),
            &mut st,
            &self.key,
            nonce,
            associated_data,
            buffer,
        )
    }

    // =========================================================================
    // OPEN
    // =========================================================================

    /// Verify and decrypt `ciphertext || tag`, returning the plaintext.
    ///
    /// # Errors
    /// `AuthenticationFailed` if the tag does not verify or `ciphertext` is
    /// shorter than the tag.
    ///
    /// # Panics
    /// If `nonce` is not 16 bytes.
    pub fn open(
        &self,
        nonce: &[u8],
        ciphertext: &[u8],
        associated_data: &[u8],
    ) -> Result<Vec<u8>, AuthenticationFailed> {
        let mut out = Vec::with_capacity(ciphertext.len().saturating_sub(TAG_SIZE));
        self.open_append(&mut out, nonce, ciphertext, associated_data)?;
        Ok(out)
    }

    /// Verify and decrypt, appending the plaintext to `dst`.
    ///
    /// On failure the speculative plaintext is erased and `dst` is truncated
    /// back to its original length.
    ///
    /// # Errors
    /// `AuthenticationFailed` if the tag does not verify or `ciphertext` is
    /// shorter than the tag.
    ///
    /// # Panics
    /// If `nonce` is not 16 bytes.
    pub fn open_append(
        &self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        ciphertext: &[u8],
        associated_data: &[u8],
    ) -> Result<(), AuthenticationFailed> {
        let nonce = check_nonce(nonce);
        let (body, tag) = split_tag(ciphertext)?;

        let start = dst.len();
        let out = slice_for_append(dst, body.len());
        out.copy_from_slice(body);
        if let Err(e) = self.open_detached(nonce, associated_data, out, tag) {
            dst.truncate(start);
            return Err(e);
        }
        Ok(())
    }

    /// Verify and decrypt `buffer` (`ciphertext || tag`) in place.
    ///
    /// On success `buffer` holds the plaintext. On authentication failure the
    /// recovered plaintext is erased and `buffer` is left empty.
    ///
    /// # Errors
    /// `AuthenticationFailed` if the tag does not verify or `buffer` is
    /// shorter than the tag.
    ///
    /// # Panics
    /// If `nonce` is not 16 bytes.
    pub fn open_in_place(
        &self,
        nonce: &[u8],
        associated_data: &[u8],
        buffer: &mut Vec<u8>,
    ) -> Result<(), AuthenticationFailed> {
        let nonce = check_nonce(nonce);
        let (body_len, tag) = {
            let (body, tag) = split_tag(buffer)?;
            (body.len(), *tag)
        };

        match self.open_detached(nonce, associated_data, &mut buffer[..body_len], &tag) {
            Ok(()) => {
                buffer.truncate(body_len);
                Ok(())
            }
            Err(e) => {
                buffer.clear();
                Err(e)
            }
        }
    }

    /// Verify and decrypt `buffer` in place against a detached tag.
    /// Never allocates.
    ///
    /// # Errors
    /// `AuthenticationFailed` if the tag does not verify; `buffer` is then
    /// zeroed.
    pub fn open_detached(
        &self,
        nonce: &[u8; NONCE_SIZE],
        associated_data: &[u8],
        buffer: &mut [u8],
        tag: &[u8; TAG_SIZE],
    ) -> Result<(), AuthenticationFailed> {
        let mut st = State::new();
        open_with(
            engine::backend(),
            &mut st,
            &self.key,
            nonce,
            associated_data,
            buffer,
            tag,
        )
    }
}

impl fmt::Debug for Morus1280 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Morus1280").finish_non_exhaustive()
    }
}

// =============================================================================
// INTERNAL
// =============================================================================

/// Internal: seal on an explicit engine and state. `st` is erased on return.
pub(crate) fn seal_with(
    backend: &Backend,
    st: &mut State,
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    associated_data: &[u8],
    buffer: &mut [u8],
) -> [u8; TAG_SIZE] {
    let mut tag = [0u8; TAG_SIZE];
    (backend.init)(st, key, nonce);
    (backend.absorb)(st, associated_data);
    (backend.encrypt)(st, buffer);
    (backend.finalize)(
        st,
        buffer.len() as u64,
        associated_data.len() as u64,
        &mut tag,
    );
    st.zeroize();
    tag
}

/// Internal: open on an explicit engine and state. `st` is erased on return,
/// and `buffer` too when the tag does not verify.
pub(crate) fn open_with(
    backend: &Backend,
    st: &mut State,
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    associated_data: &[u8],
    buffer: &mut [u8],
    expected: &[u8; TAG_SIZE],
) -> Result<(), AuthenticationFailed> {
    let mut tag = [0u8; TAG_SIZE];
    (backend.init)(st, key, nonce);
    (backend.absorb)(st, associated_data);
    (backend.decrypt)(st, buffer);
    (backend.finalize)(
        st,
        buffer.len() as u64,
        associated_data.len() as u64,
        &mut tag,
    );
    st.zeroize();

    let ok: bool = tag[..].ct_eq(&expected[..]).into();
    tag.zeroize();
    if ok {
        Ok(())
    } else {
        burn_bytes(buffer);
        Err(AuthenticationFailed)
    }
}

/// Enforce the nonce length precondition.
fn check_nonce(nonce: &[u8]) -> &[u8; NONCE_SIZE] {
    match nonce.try_into() {
        Ok(n) => n,
        Err(_) => panic!("{}", InvalidNonceSize::new(nonce.len())),
    }
}

/// Split `ciphertext || tag`. Inputs shorter than the tag fail authentication.
fn split_tag(sealed: &[u8]) -> Result<(&[u8], &[u8; TAG_SIZE]), AuthenticationFailed> {
    let body_len = sealed
        .len()
        .checked_sub(TAG_SIZE)
        .ok_or(AuthenticationFailed)?;
    let (body, tag) = sealed.split_at(body_len);
    let tag = tag.try_into().map_err(|_| AuthenticationFailed)?;
    Ok((body, tag))
}

/// Grow `dst` by `n` bytes and return the new tail.
///
/// Grow-if-needed, else reuse: spare capacity is used when it suffices,
/// otherwise the vector reallocates with its contents preserved. The tail
/// never overlaps any caller-held input slice; exact-overlap (in-place)
/// operation goes through `seal_in_place` / `open_in_place` instead.
fn slice_for_append(dst: &mut Vec<u8>, n: usize) -> &mut [u8] {
    let start = dst.len();
    dst.resize(start + n, 0);
    &mut dst[start..]
}
