//! Output Feedback (OFB) mode implementation
//!
//! OFB repeatedly encrypts a keystream register seeded from the IV and
//! XORs the plaintext against it. The keystream never depends on the
//! data, so encryption and decryption are the same operation and any
//! input length is accepted. The register position persists across
//! calls, byte-granular.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::BlockCipher;
use crate::error::Result;
use crate::types::iv::OfbCompatible;
use crate::types::Iv;

/// OFB mode implementation
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ofb<B: BlockCipher + Zeroize> {
    cipher: B,
    /// Keystream register, seeded from the IV
    register: [u8; 16],
    position: usize,
}

impl<B: BlockCipher + Zeroize> Ofb<B> {
    /// Creates a new OFB mode instance with the given cipher and IV
    pub fn new<const N: usize>(cipher: B, iv: &Iv<N>) -> Self
    where
        Iv<N>: OfbCompatible,
    {
        let mut register = [0u8; 16];
        register.copy_from_slice(iv.as_ref());
        Self {
            cipher,
            register,
            position: 16,
        }
    }

    /// Reinitializes the stream with a fresh IV
    pub fn reset<const N: usize>(&mut self, iv: &Iv<N>)
    where
        Iv<N>: OfbCompatible,
    {
        self.register.copy_from_slice(iv.as_ref());
        self.position = 16;
    }

    /// Encrypts a message of any length, continuing the keystream from
    /// any earlier calls
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut ciphertext = Vec::with_capacity(plaintext.len());

        for &byte in plaintext {
            if self.position == self.register.len() {
                self.cipher.encrypt_block(&mut self.register)?;
                self.position = 0;
            }
            ciphertext.push(byte ^ self.register[self.position]);
            self.position += 1;
        }

        Ok(ciphertext)
    }

    /// Decrypts a message
    ///
    /// In OFB mode, encryption and decryption are the same operation.
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.encrypt(ciphertext)
    }
}

#[cfg(test)]
mod tests;
