//! Internal utilities shared by the gmcrypt crates.
//!
//! Nothing here is part of the public API contract.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
