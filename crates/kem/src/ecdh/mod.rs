//! Plain elliptic curve Diffie-Hellman over any prime-field curve
//!
//! No identities, tags or KDF: the shared secret is the fixed-width x
//! coordinate of `[d]P_peer`. Callers feed it to their own KDF.

use tracing::debug;

use crate::error::{validate, Error, Result};
use gmcrypt_algorithms::ec::{fixed_bytes, CurvePoint, PrimeFieldCurve};
use gmcrypt_algorithms::sm2::PrivateKey;
use gmcrypt_common::SecretVec;

/// ECDH bound to one curve
#[derive(Clone, Copy, Debug)]
pub struct Ecdh<'a> {
    curve: &'a PrimeFieldCurve,
}

impl<'a> Ecdh<'a> {
    /// Create an engine for `curve`
    pub fn new(curve: &'a PrimeFieldCurve) -> Self {
        Ecdh { curve }
    }

    /// The curve this engine works on
    pub fn curve(&self) -> &'a PrimeFieldCurve {
        self.curve
    }

    /// `[d]P_peer`, after validating the peer's key
    pub fn shared_point(&self, private_key: &PrivateKey, peer: &CurvePoint) -> Result<CurvePoint> {
        validate::key(!peer.is_identity(), "peer public", "point at infinity")?;
        self.curve.check_point(peer)?;

        let shared = self.curve.multiply(peer, &private_key.scalar())?;
        if shared.is_identity() {
            debug!("ECDH shared point is the point at infinity");
            return Err(Error::POINT_AT_INFINITY);
        }
        Ok(shared)
    }

    /// The x coordinate of the shared point, at the curve's field width
    pub fn shared_secret(&self, private_key: &PrivateKey, peer: &CurvePoint) -> Result<SecretVec> {
        let shared = self.shared_point(private_key, peer)?;
        let x = shared.x().ok_or(Error::POINT_AT_INFINITY)?;
        Ok(SecretVec::new(fixed_bytes(x, self.curve.field_len())?))
    }
}
