//! Constant values for gmcrypt cryptographic operations
//!
//! Domain parameters are stored as big-endian hex strings so that they can be
//! parsed by whatever big-integer backend the algorithm crate uses.

#![no_std]

pub mod traditional;
pub mod utils;
