//! Symmetric cipher primitives for OpenPGP implementations
//!
//! This crate provides the two 128-bit block ciphers an OpenPGP packet
//! layer needs beyond the usual AES family, Camellia (RFC 3713) and
//! Twofish, together with the classic modes of operation (ECB, CBC, CFB
//! and OFB) built over a cipher-agnostic [`BlockCipher`] trait.
//!
//! Key schedules are derived once at construction and never mutated, so a
//! cipher instance may be shared freely between threads. Mode wrappers
//! carry their chaining state explicitly and take `&mut self`; one stream
//! of data gets one exclusively-owned wrapper instance.
//!
//! ```
//! use pgp_ciphers::{BlockCipher, Camellia, Cbc, Iv};
//!
//! let key = [0x2Bu8; 16];
//! let cipher = Camellia::new(&key).unwrap();
//! let iv = Iv::<16>::zeroed();
//!
//! let mut stream = Cbc::new(cipher, &iv);
//! let ciphertext = stream.encrypt(b"sixteen byte blk").unwrap();
//!
//! let cipher = Camellia::new(&key).unwrap();
//! let mut stream = Cbc::new(cipher, &iv);
//! assert_eq!(stream.decrypt(&ciphertext).unwrap(), b"sixteen byte blk");
//! ```
//!
//! No padding is performed anywhere in this crate; ECB and CBC require
//! block-aligned input and padding is the caller's responsibility.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher engines and modes of operation
pub mod block;
pub use block::{BlockCipher, Camellia, CipherAlgorithm, Twofish};
#[cfg(feature = "alloc")]
pub use block::{Cbc, Cfb, Ecb, Ofb};

// Type system
pub mod types;
pub use types::Iv;
