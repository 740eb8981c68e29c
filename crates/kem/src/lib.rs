//! Key exchange for the gmcrypt library
//!
//! This crate implements the SM2 authenticated key exchange, with a
//! per-party session state machine, and plain ECDH over any
//! [`PrimeFieldCurve`](gmcrypt_algorithms::ec::PrimeFieldCurve).

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod ecdh;
pub mod error;
pub mod sm2kx;

// Re-exports
pub use ecdh::Ecdh;
pub use error::{Error, Result};
pub use sm2kx::{
    AgreementInfo, AgreementResult, KeyExchangeSession, SessionState, Sm2KeyExchange, Tag,
};
