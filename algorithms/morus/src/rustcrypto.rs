//! `RustCrypto` `aead` trait integration.
//!
//! Lets [`Morus1280`] plug into code written against `aead::AeadInPlace`
//! (and, through the blanket impls, `aead::Aead`).

use crate::aead_impl::Morus1280;
use crate::kernels::constants::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};
use aead::consts::{U0, U16, U32};
use aead::{AeadCore, AeadInPlace, Error, Key, KeyInit, KeySizeUser, Nonce, Tag};
use zeroize::Zeroize;

impl KeySizeUser for Morus1280 {
    type KeySize = U32;
}

impl KeyInit for Morus1280 {
    fn new(key: &Key<Self>) -> Self {
        let mut k = [0u8; KEY_SIZE];
        k.copy_from_slice(key);
        let aead = Self::new(&k);
        k.zeroize();
        aead
    }
}

impl AeadCore for Morus1280 {
    type NonceSize = U16;
    type TagSize = U16;
    type CiphertextOverhead = U0;
}

impl AeadInPlace for Morus1280 {
    fn encrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
    ) -> aead::Result<Tag<Self>> {
        let nonce: &[u8; NONCE_SIZE] = nonce.as_slice().try_into().map_err(|_| Error)?;
        let tag = self.seal_detached(nonce, associated_data, buffer);
        Ok(Tag::<Self>::clone_from_slice(&tag))
    }

    fn decrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
        tag: &Tag<Self>,
    ) -> aead::Result<()> {
        let nonce: &[u8; NONCE_SIZE] = nonce.as_slice().try_into().map_err(|_| Error)?;
        let tag: &[u8; TAG_SIZE] = tag.as_slice().try_into().map_err(|_| Error)?;
        self.open_detached(nonce, associated_data, buffer, tag)
            .map_err(|_| Error)
    }
}
