//! Primitives of the Chinese commercial cryptography suite
//!
//! This crate provides the building blocks shared by the SM2 engines:
//!
//! - [`hash::Sm3`], the SM3 hash function (GB/T 32905)
//! - [`kdf`], the counter-mode key derivation function built on SM3
//! - [`ec`], short Weierstrass curves over prime fields with arbitrary
//!   domain parameters, including the SM2 recommended curve
//! - [`sm2`], private keys, key pairs and the identity hash `Z`
//!
//! Signature, encryption and key exchange live in `gmcrypt-sign`,
//! `gmcrypt-pke` and `gmcrypt-kem`.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Hash function implementations
pub mod hash;
pub use hash::{HashFunction, Sm3};

// Key derivation
pub mod kdf;
pub use kdf::{kdf, Kdf};

// Elliptic curve arithmetic
pub mod ec;
pub use ec::{CurvePoint, PointFormat, PrimeFieldCurve};

// SM2 key material
pub mod sm2;
pub use sm2::{identity_hash, IdentifiedPublicKey, KeyPair, PrivateKey};

// Type system
pub mod types;
pub use types::{ConstantTimeEq, Digest, FixedSize};

// Re-export security types from gmcrypt-common
pub use gmcrypt_common::security::{EphemeralSecret, SecretVec, ZeroizeGuard};
