//! Validation utilities shared by the engines and mode wrappers

use super::{Error, Result};

/// Validate a key length against a cipher's supported set
#[inline(always)]
pub fn key_length(cipher: &'static str, actual: usize, allowed: &[usize]) -> Result<()> {
    if !allowed.contains(&actual) {
        return Err(Error::InvalidKeyLength { cipher, actual });
    }
    Ok(())
}

/// Validate a single-block buffer length
#[inline(always)]
pub fn block_length(cipher: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidBlockLength {
            cipher,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a mode input is a whole number of blocks
#[inline(always)]
pub fn input_multiple(mode: &'static str, actual: usize, block_size: usize) -> Result<()> {
    if actual % block_size != 0 {
        return Err(Error::InvalidInputLength {
            mode,
            block_size,
            actual,
        });
    }
    Ok(())
}

/// Validate an IV length
#[inline(always)]
pub fn iv_length(actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidIvLength { expected, actual });
    }
    Ok(())
}

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Parameter { name, reason });
    }
    Ok(())
}
