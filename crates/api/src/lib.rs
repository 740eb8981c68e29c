//! Public API traits and types for the gmcrypt library
//!
//! This crate provides the public API surface for the gmcrypt ecosystem: the
//! error taxonomy every algorithm crate converts into, and the traits the SM2
//! engines implement.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

pub use traits::{KeyAgreement, Pke, Signature};

// Re-export trait modules for direct access
pub use traits::{agreement, pke, signature};
