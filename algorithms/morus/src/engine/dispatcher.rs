//! Hardware Dispatcher
//!
//! Selects the AVX2 engine or the portable fallback for the current CPU.
//! The choice is made once per process and never changes afterwards, except
//! through the explicit portable override.

use crate::kernels;
#[cfg(target_arch = "x86_64")]
use crate::kernels::constants::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};
#[cfg(target_arch = "x86_64")]
use crate::kernels::State;
use crate::types::Backend;
use core::sync::atomic::{AtomicBool, Ordering};

/// Portable override. Starts set when built with `force-portable`.
static FORCE_PORTABLE: AtomicBool = AtomicBool::new(cfg!(feature = "force-portable"));

/// Backend bound on first use.
#[cfg(feature = "std")]
static SELECTED: std::sync::OnceLock<&'static Backend> = std::sync::OnceLock::new();

// =============================================================================
// BACKEND TABLES
// =============================================================================

/// Portable reference engine.
pub static PORTABLE: Backend = Backend {
    name: "Portable",
    accelerated: false,
    init: kernels::portable::init,
    absorb: kernels::portable::absorb,
    encrypt: kernels::portable::encrypt,
    decrypt: kernels::portable::decrypt,
    finalize: kernels::portable::finalize,
};

/// AVX2 engine. Only handed out after `detect_capability()` succeeded.
#[cfg(target_arch = "x86_64")]
static AVX2: Backend = Backend {
    name: "AVX2",
    accelerated: true,
    init: safe_avx2_init,
    absorb: safe_avx2_absorb,
    encrypt: safe_avx2_encrypt,
    decrypt: safe_avx2_decrypt,
    finalize: safe_avx2_finalize,
};

// =============================================================================
// CAPABILITY DETECTION
// =============================================================================

/// Returns `true` if the AVX2 engine may run on this host.
///
/// `is_x86_feature_detected!` checks CPUID for AVX/AVX2 and also confirms via
/// XGETBV that the OS saves and restores YMM state.
#[cfg(all(feature = "std", target_arch = "x86_64"))]
#[must_use]
pub fn detect_capability() -> bool {
    is_x86_feature_detected!("avx") && is_x86_feature_detected!("avx2")
}

/// Returns `true` if the AVX2 engine may run on this host.
///
/// Without `std` there is no runtime probe; the build target decides.
#[cfg(all(not(feature = "std"), target_arch = "x86_64"))]
#[must_use]
pub const fn detect_capability() -> bool {
    cfg!(target_feature = "avx2")
}

/// Returns `true` if the AVX2 engine may run on this host.
#[cfg(not(target_arch = "x86_64"))]
#[must_use]
pub const fn detect_capability() -> bool {
    false
}

// =============================================================================
// DISPATCHER
// =============================================================================

#[cfg(all(feature = "std", target_arch = "x86_64"))]
fn select() -> &'static Backend {
    if detect_capability() {
        log::debug!("morus: AVX2 available, binding accelerated engine");
        &AVX2
    } else {
        log::debug!("morus: AVX2 unavailable, binding portable engine");
        &PORTABLE
    }
}

#[cfg(all(feature = "std", not(target_arch = "x86_64")))]
fn select() -> &'static Backend {
    log::debug!("morus: no accelerated engine for this architecture, binding portable engine");
    &PORTABLE
}

#[cfg(feature = "std")]
fn bound() -> &'static Backend {
    *SELECTED.get_or_init(select)
}

/// Without `std` the choice is fixed at compile time and is not logged.
#[cfg(not(feature = "std"))]
const fn bound() -> &'static Backend {
    #[cfg(target_arch = "x86_64")]
    if detect_capability() {
        return &AVX2;
    }
    &PORTABLE
}

/// Returns the engine table for this process.
#[must_use]
pub fn backend() -> &'static Backend {
    if FORCE_PORTABLE.load(Ordering::Acquire) {
        return &PORTABLE;
    }
    bound()
}

/// Pin all subsequent calls to the portable engine.
pub fn force_portable() {
    if FORCE_PORTABLE.swap(true, Ordering::AcqRel) {
        return;
    }
    if detect_capability() {
        log::warn!("morus: hardware acceleration available but disabled by override");
    } else {
        log::info!("morus: portable engine forced");
    }
}

// =============================================================================
// WRAPPERS
// =============================================================================

#[cfg(target_arch = "x86_64")]
#[allow(unsafe_code)]
fn safe_avx2_init(st: &mut State, key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE]) {
    // SAFETY: Only reachable through `AVX2`, which `select` returns after CPUID validation.
    unsafe { kernels::avx2::init(st, key, nonce) }
}

#[cfg(target_arch = "x86_64")]
#[allow(unsafe_code)]
fn safe_avx2_absorb(st: &mut State, data: &[u8]) {
    // SAFETY: Only reachable through `AVX2`, which `select` returns after CPUID validation.
    unsafe { kernels::avx2::absorb(st, data) }
}

#[cfg(target_arch = "x86_64")]
#[allow(unsafe_code)]
fn safe_avx2_encrypt(st: &mut State, buf: &mut [u8]) {
    // SAFETY: Only reachable through `AVX2`, which `select` returns after CPUID validation.
    unsafe { kernels::avx2::encrypt(st, buf) }
}

#[cfg(target_arch = "x86_64")]
#[allow(unsafe_code)]
fn safe_avx2_decrypt(st: &mut State, buf: &mut [u8]) {
    // SAFETY: Only reachable through `AVX2`, which `select` returns after CPUID validation.
    unsafe { kernels::avx2::decrypt(st, buf) }
}

#[cfg(target_arch = "x86_64")]
#[allow(unsafe_code)]
fn safe_avx2_finalize(st: &mut State, msg_len: u64, ad_len: u64, tag: &mut [u8; TAG_SIZE]) {
    // SAFETY: Only reachable through `AVX2`, which `select` returns after CPUID validation.
    unsafe { kernels::avx2::finalize(st, msg_len, ad_len, tag) }
}

/// Both tables, for cross-engine checks. The AVX2 table is only included
/// when the host supports it.
#[cfg(test)]
pub(crate) fn available_backends() -> impl Iterator<Item = &'static Backend> {
    #[cfg(target_arch = "x86_64")]
    let accelerated = detect_capability().then_some(&AVX2);
    #[cfg(not(target_arch = "x86_64"))]
    let accelerated: Option<&'static Backend> = None;

    core::iter::once(&PORTABLE).chain(accelerated)
}
