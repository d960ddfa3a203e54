//! Block cipher modes of operation
//!
//! This module implements the classic confidentiality modes over the
//! [`BlockCipher`] trait: ECB, CBC, CFB (configurable segment size) and
//! OFB. Each wrapper owns its chaining state and takes `&mut self` for
//! processing, so a stream has exactly one owner; splitting a message
//! across several calls yields the same bytes as one call on the whole.
//!
//! None of the modes pads. ECB and CBC reject input that is not a whole
//! number of blocks; CFB and OFB accept any length.
//!
//! [`BlockCipher`]: super::BlockCipher

pub mod cbc;
pub mod cfb;
pub mod ecb;
pub mod ofb;

// Re-exports
pub use cbc::Cbc;
pub use cfb::Cfb;
pub use ecb::Ecb;
pub use ofb::Ofb;
