//! Digital signature traits for gmcrypt
//!
//! This module defines the trait that signature engines implement.
//! The design does not require mutable access to secret keys.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Core trait for digital signature algorithms
///
/// Secret keys are opaque types that cannot be directly manipulated as bytes.
/// Public keys carry whatever binding data the scheme mixes into the message
/// digest (for SM2, the signer's Z value).
pub trait Signature {
    /// Public key type for this algorithm
    type PublicKey: Clone;

    /// Secret key type - must be zeroizable but not byte-accessible
    type SecretKey: Zeroize;

    /// Signature data type
    type SignatureData: Clone;

    /// Key pair type
    type KeyPair;

    /// Returns the name of this signature algorithm
    fn name(&self) -> &'static str;

    /// Generate a new key pair using the provided RNG
    ///
    /// Implementations must use the provided RNG for all randomness.
    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(&self, keypair: &Self::KeyPair) -> Result<Self::PublicKey>;

    /// Sign a message with the given key pair
    fn sign<R: CryptoRng + RngCore>(
        &self,
        message: &[u8],
        keypair: &Self::KeyPair,
        rng: &mut R,
    ) -> Result<Self::SignatureData>;

    /// Verify a signature against a message and public key
    ///
    /// Returns `Error::InvalidSignature` for any signature that does not verify.
    fn verify(
        &self,
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<()>;
}
