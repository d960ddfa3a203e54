//! Block cipher engines and modes of operation
//!
//! This module contains the Camellia and Twofish engines and the mode
//! wrappers (ECB, CBC, CFB, OFB) built over the [`BlockCipher`] trait.
//! The mode layer depends only on the trait, never on a concrete cipher.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;
#[cfg(feature = "alloc")]
use rand::{CryptoRng, RngCore};
#[cfg(feature = "alloc")]
use zeroize::Zeroizing;

#[cfg(feature = "alloc")]
use crate::error::validate;
use crate::error::Result;

pub mod camellia;
pub mod twofish;

#[cfg(feature = "alloc")]
pub mod modes;

// Re-exports
pub use camellia::Camellia;
pub use twofish::Twofish;

#[cfg(feature = "alloc")]
pub use modes::{Cbc, Cfb, Ecb, Ofb};

/// Marker trait for cipher algorithms with compile-time properties
pub trait CipherAlgorithm {
    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Key sizes in bytes accepted by the key schedule
    const KEY_SIZES: &'static [usize];

    /// Algorithm name
    fn name() -> &'static str;
}

/// Trait for block ciphers
///
/// An instance is an immutable key schedule: it is built once by [`new`]
/// and never mutated afterwards, so `encrypt_block` and `decrypt_block`
/// may be called concurrently from any number of threads. For every valid
/// schedule and every 16-byte block, decryption inverts encryption.
///
/// [`new`]: BlockCipher::new
pub trait BlockCipher: CipherAlgorithm + Sized {
    /// Creates a new block cipher instance, deriving the key schedule
    ///
    /// Fails with [`Error::InvalidKeyLength`] when the key length is not
    /// in [`KEY_SIZES`].
    ///
    /// [`Error::InvalidKeyLength`]: crate::Error::InvalidKeyLength
    /// [`KEY_SIZES`]: CipherAlgorithm::KEY_SIZES
    fn new(key: &[u8]) -> Result<Self>;

    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Returns the block size in bytes
    fn block_size() -> usize {
        Self::BLOCK_SIZE
    }

    /// Returns the supported key sizes in bytes
    fn key_sizes() -> &'static [usize] {
        Self::KEY_SIZES
    }

    /// Generate a random key of one of the supported lengths
    #[cfg(feature = "alloc")]
    fn generate_key<R: RngCore + CryptoRng>(
        rng: &mut R,
        len: usize,
    ) -> Result<Zeroizing<Vec<u8>>> {
        validate::key_length(Self::name(), len, Self::KEY_SIZES)?;

        let mut key = Zeroizing::new(Vec::new());
        key.resize(len, 0);
        rng.fill_bytes(key.as_mut_slice());
        Ok(key)
    }
}
