//! SM2 digital signatures (GB/T 32918.2)
//!
//! [`Sm2Signer`] signs and verifies over any [`PrimeFieldCurve`] it is lent.
//! The message digest is `e = SM3(Z || M)`, where `Z` binds the signer's
//! identity and the domain parameters (see
//! [`identity_hash`](gmcrypt_algorithms::sm2::identity_hash)).
//!
//! [`PrimeFieldCurve`]: gmcrypt_algorithms::ec::PrimeFieldCurve

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod sm2;

pub use error::{Error, Result};
pub use sm2::{Signature, Sm2Signer};
