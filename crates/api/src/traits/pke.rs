//! Trait definition for Public Key Encryption (PKE) schemes.

use alloc::vec::Vec;

use crate::error::Result;
use rand::{CryptoRng, RngCore};

/// Trait for Public Key Encryption schemes.
pub trait Pke {
    /// Public key type for the PKE scheme.
    type PublicKey: Clone;

    /// Secret key type for the PKE scheme.
    type SecretKey;

    /// Ciphertext type produced by the PKE scheme.
    type Ciphertext: AsRef<[u8]> + Clone;

    /// Returns the PKE algorithm name.
    fn name(&self) -> &'static str;

    /// Generates a new key pair for the PKE scheme.
    fn keypair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Encrypts a plaintext message using the recipient's public key.
    fn encrypt<R: RngCore + CryptoRng>(
        &self,
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        rng: &mut R,
    ) -> Result<Self::Ciphertext>;

    /// Decrypts a ciphertext using the recipient's secret key.
    ///
    /// No partial plaintext is ever returned: integrity failures yield an error.
    fn decrypt(&self, sk_recipient: &Self::SecretKey, ciphertext: &[u8]) -> Result<Vec<u8>>;
}
