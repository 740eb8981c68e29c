//! Common implementations and shared functionality for the gmcrypt library
//!
//! This crate provides the secret-holding containers used across the
//! gmcrypt components.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecretVec, SecureZeroingType, ZeroizeGuard};
