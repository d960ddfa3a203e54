//! Electronic Codebook (ECB) mode implementation
//!
//! ECB transforms each block independently under the same schedule. It is
//! stateless, takes no IV, and leaks equal-block structure; it exists
//! here because the OpenPGP tooling above this crate needs it for key
//! self-checks and test vectors, not as a recommended mode.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::BlockCipher;
use crate::error::{validate, Result};

/// ECB mode implementation
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ecb<B: BlockCipher + Zeroize> {
    cipher: B,
}

impl<B: BlockCipher + Zeroize> Ecb<B> {
    /// Creates a new ECB mode instance with the given cipher
    pub fn new(cipher: B) -> Self {
        Self { cipher }
    }

    /// Encrypts a message
    ///
    /// The plaintext must be a multiple of the block size; padding is the
    /// caller's responsibility.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        validate::input_multiple("ECB", plaintext.len(), B::block_size())?;

        let mut ciphertext = plaintext.to_vec();
        for chunk in ciphertext.chunks_exact_mut(B::block_size()) {
            self.cipher.encrypt_block(chunk)?;
        }
        Ok(ciphertext)
    }

    /// Decrypts a message
    ///
    /// The ciphertext must be a multiple of the block size.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        validate::input_multiple("ECB", ciphertext.len(), B::block_size())?;

        let mut plaintext = ciphertext.to_vec();
        for chunk in plaintext.chunks_exact_mut(B::block_size()) {
            self.cipher.decrypt_block(chunk)?;
        }
        Ok(plaintext)
    }
}

#[cfg(test)]
mod tests;
