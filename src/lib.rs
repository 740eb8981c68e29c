//! # gmcrypt
//!
//! SM3 hashing and the SM2 signature, encryption and key exchange schemes
//! over prime-field curves, in pure Rust.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! gmcrypt = "0.3"
//! ```
//!
//! ## Features
//!
//! - `full` (default): every component below
//! - `algorithms`: curves, SM3, the KDF and SM2 keys
//! - `sign`, `pke`, `kem`: the three SM2 engines
//! - `serde`: serialization of points, digests, signatures and exchange info
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`gmcrypt-algorithms`]: curve arithmetic, SM3, KDF, SM2 keys and identity hashing
//! - [`gmcrypt-sign`]: SM2 digital signatures
//! - [`gmcrypt-pke`]: SM2 public key encryption
//! - [`gmcrypt-kem`]: SM2 key exchange and plain ECDH
//!
//! ```
//! # #[cfg(feature = "full")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use gmcrypt::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let curve = PrimeFieldCurve::sm2()?;
//! let keypair = KeyPair::generate(&curve, &mut OsRng)?.with_identity(&curve, b"alice@example.com")?;
//!
//! let signer = Sm2Signer::new(&curve);
//! let signature = signer.sign_with_identity(&keypair, b"hello", &mut OsRng)?;
//! assert!(signer.verify_with_identity(keypair.public_key(), b"alice@example.com", &signature, b"hello"));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "full"))]
//! # fn main() {}
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use gmcrypt_api as api;
pub use gmcrypt_common as common;
pub use gmcrypt_internal as internal;
pub use gmcrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use gmcrypt_algorithms as algorithms;

#[cfg(feature = "sign")]
pub use gmcrypt_sign as sign;

#[cfg(feature = "pke")]
pub use gmcrypt_pke as pke;

#[cfg(feature = "kem")]
pub use gmcrypt_kem as kem;

/// Common imports for gmcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{KeyAgreement, Pke, Signature};

    // Re-export security types
    pub use crate::common::{EphemeralSecret, SecretVec, SecureZeroingType, ZeroizeGuard};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{
        CurvePoint, HashFunction, KeyPair, PointFormat, PrimeFieldCurve, PrivateKey, Sm3,
    };

    #[cfg(feature = "sign")]
    pub use crate::sign::Sm2Signer;

    #[cfg(feature = "pke")]
    pub use crate::pke::Sm2Encryptor;

    #[cfg(feature = "kem")]
    pub use crate::kem::{Ecdh, KeyExchangeSession, Sm2KeyExchange};
}
