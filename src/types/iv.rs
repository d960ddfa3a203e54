//! Fixed-size initialization vector type
//!
//! CBC, CFB and OFB all seed their chaining state from a 16-byte IV. The
//! [`Iv`] type carries that requirement in its size parameter, and the
//! sealed per-mode marker traits below keep a mode constructor from ever
//! seeing an IV of the wrong width.

use core::fmt;
use core::ops::{Deref, DerefMut};
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::error::{validate, Result};
use crate::types::sealed::Sealed;

/// An initialization vector of `N` bytes
///
/// Equality checks run in constant time. The IV itself is not secret, but
/// it shares buffers with chaining state that is, so it zeroizes like one.
#[derive(Clone, Zeroize)]
pub struct Iv<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> Sealed for Iv<N> {}

impl<const N: usize> Iv<N> {
    /// Wraps an existing byte array
    pub fn new(bytes: [u8; N]) -> Self {
        Self { bytes }
    }

    /// The all-zero IV
    pub fn zeroed() -> Self {
        Self { bytes: [0u8; N] }
    }

    /// Copies an IV out of a slice, rejecting any other length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::iv_length(slice.len(), N)?;

        let mut bytes = [0u8; N];
        bytes.copy_from_slice(slice);
        Ok(Self { bytes })
    }

    /// Draws a fresh random IV
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; N];
        rng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Width of this IV in bytes
    pub fn size() -> usize {
        N
    }
}

impl<const N: usize> From<[u8; N]> for Iv<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self { bytes }
    }
}

impl<const N: usize> AsRef<[u8]> for Iv<N> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<const N: usize> AsMut<[u8]> for Iv<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl<const N: usize> Deref for Iv<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.bytes
    }
}

impl<const N: usize> DerefMut for Iv<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.bytes
    }
}

impl<const N: usize> PartialEq for Iv<N> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes.ct_eq(&other.bytes).into()
    }
}

impl<const N: usize> Eq for Iv<N> {}

impl<const N: usize> fmt::Debug for Iv<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iv<{}>({:?})", N, &self.bytes[..])
    }
}

/// IV widths accepted by CBC mode
pub trait CbcCompatible: Sealed {}
impl CbcCompatible for Iv<16> {}

/// IV widths accepted by CFB mode
pub trait CfbCompatible: Sealed {}
impl CfbCompatible for Iv<16> {}

/// IV widths accepted by OFB mode
pub trait OfbCompatible: Sealed {}
impl OfbCompatible for Iv<16> {}
