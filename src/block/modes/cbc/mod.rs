//! Cipher Block Chaining (CBC) mode implementation
//!
//! CBC XORs each plaintext block with the previous ciphertext block
//! before encryption; the first block is XORed with the IV. The chaining
//! block lives in the wrapper and persists across calls, so a message may
//! be fed in several pieces.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::BlockCipher;
use crate::error::{validate, Result};
use crate::types::iv::CbcCompatible;
use crate::types::Iv;

/// CBC mode implementation
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cbc<B: BlockCipher + Zeroize> {
    cipher: B,
    /// Previous ciphertext block, seeded from the IV
    state: [u8; 16],
}

impl<B: BlockCipher + Zeroize> Cbc<B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    pub fn new<const N: usize>(cipher: B, iv: &Iv<N>) -> Self
    where
        Iv<N>: CbcCompatible,
    {
        let mut state = [0u8; 16];
        state.copy_from_slice(iv.as_ref());
        Self { cipher, state }
    }

    /// Reinitializes the stream with a fresh IV
    pub fn reset<const N: usize>(&mut self, iv: &Iv<N>)
    where
        Iv<N>: CbcCompatible,
    {
        self.state.copy_from_slice(iv.as_ref());
    }

    /// Encrypts a message, chaining from any earlier calls
    ///
    /// The plaintext must be a multiple of the block size; padding is the
    /// caller's responsibility.
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        validate::input_multiple("CBC", plaintext.len(), B::block_size())?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());

        for chunk in plaintext.chunks(B::block_size()) {
            // Both engines here are 128-bit block ciphers
            let mut block = [0u8; 16];
            block.copy_from_slice(chunk);

            for (b, s) in block.iter_mut().zip(self.state.iter()) {
                *b ^= s;
            }

            self.cipher.encrypt_block(&mut block)?;

            ciphertext.extend_from_slice(&block);
            self.state = block;
        }

        Ok(ciphertext)
    }

    /// Decrypts a message, chaining from any earlier calls
    ///
    /// The ciphertext must be a multiple of the block size.
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        validate::input_multiple("CBC", ciphertext.len(), B::block_size())?;

        let mut plaintext = Vec::with_capacity(ciphertext.len());

        for chunk in ciphertext.chunks(B::block_size()) {
            let mut block = [0u8; 16];
            block.copy_from_slice(chunk);

            let current = block;
            self.cipher.decrypt_block(&mut block)?;

            for (b, s) in block.iter_mut().zip(self.state.iter()) {
                *b ^= s;
            }

            plaintext.extend_from_slice(&block);
            self.state = current;
        }

        Ok(plaintext)
    }
}
