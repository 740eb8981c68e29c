//! Trait definition for authenticated two-party key agreement
//!
//! Each party holds a long-term static key and draws a fresh ephemeral key
//! per exchange. The public halves travel to the peer as `PublicInfo`.

use crate::Result;
use rand::{CryptoRng, RngCore};

/// Trait for two-party key agreement protocols
pub trait KeyAgreement {
    /// Long-term key material of one party
    type StaticKey;

    /// Single-use key material drawn per exchange
    type EphemeralKey;

    /// Wire-visible material one party reveals to the other
    type PublicInfo: Clone;

    /// Shared key plus whatever confirmation data the protocol produces
    type Output;

    /// Returns the protocol name.
    fn name(&self) -> &'static str;

    /// Draw a fresh ephemeral key using the provided RNG
    fn ephemeral<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<Self::EphemeralKey>;

    /// Run the local side of the exchange against the peer's public info
    ///
    /// Fails if the peer's material is malformed or its confirmation tag,
    /// when present, does not match.
    fn agree(
        &self,
        own_static: &Self::StaticKey,
        own_ephemeral: &Self::EphemeralKey,
        peer: &Self::PublicInfo,
    ) -> Result<Self::Output>;
}
