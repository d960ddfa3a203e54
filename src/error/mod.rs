//! Error handling for the cipher engines and mode wrappers

#[cfg(feature = "std")]
use std::fmt;

#[cfg(not(feature = "std"))]
use core::fmt;

/// The error type for cipher operations
///
/// No error here is recoverable in place: the caller either supplied a key
/// or buffer of the wrong size, or asked a mode for something its
/// definition does not allow. Nothing is retried or silently corrected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key length not in the cipher's supported set
    InvalidKeyLength {
        /// Cipher that rejected the key
        cipher: &'static str,
        /// Length of the rejected key in bytes
        actual: usize,
    },

    /// Block buffer passed to a single-block operation with the wrong size
    InvalidBlockLength {
        /// Cipher that rejected the buffer
        cipher: &'static str,
        /// Required block size in bytes
        expected: usize,
        /// Actual buffer length in bytes
        actual: usize,
    },

    /// Mode input that must be block-aligned but is not
    InvalidInputLength {
        /// Mode that rejected the input
        mode: &'static str,
        /// Block size the input must be a multiple of
        block_size: usize,
        /// Actual input length in bytes
        actual: usize,
    },

    /// Initialization vector with the wrong size
    InvalidIvLength {
        /// Required IV size in bytes
        expected: usize,
        /// Actual IV length in bytes
        actual: usize,
    },

    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },
}

/// Result type for cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeyLength { cipher, actual } => {
                write!(
                    f,
                    "Invalid key length for {}: got {} bytes, expected 16, 24 or 32",
                    cipher, actual
                )
            }
            Error::InvalidBlockLength {
                cipher,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid block length for {}: expected {}, got {}",
                    cipher, expected, actual
                )
            }
            Error::InvalidInputLength {
                mode,
                block_size,
                actual,
            } => {
                write!(
                    f,
                    "Invalid input length for {}: {} is not a multiple of {}",
                    mode, actual, block_size
                )
            }
            Error::InvalidIvLength { expected, actual } => {
                write!(
                    f,
                    "Invalid IV length: expected {}, got {}",
                    expected, actual
                )
            }
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;
