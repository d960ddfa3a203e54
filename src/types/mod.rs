//! Type-safe wrappers for cipher inputs
//!
//! Provides the IV type consumed by the mode-of-operation layer, with
//! compile-time size guarantees and sealed per-mode compatibility markers.

// Submodules
pub mod iv;

// Sealed trait module (not public)
pub(crate) mod sealed;

// Re-export main types
pub use iv::Iv;
