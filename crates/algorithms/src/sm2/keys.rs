//! SM2 private keys and key pairs

use alloc::vec::Vec;
use core::fmt;

use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use super::identity::identity_hash;
use crate::ec::{fixed_bytes, in_scalar_range, CurvePoint, PrimeFieldCurve};
use crate::error::{validate, Error, Result};
use crate::types::Digest;

/// A private scalar `d` in `(0, n)`
///
/// Held as a fixed-width big-endian buffer that is wiped on drop. The integer
/// form is rebuilt on demand by [`scalar`](Self::scalar); callers should keep
/// that value short-lived.
#[derive(Clone)]
pub struct PrivateKey {
    bytes: Zeroizing<Vec<u8>>,
}

impl PrivateKey {
    /// Wrap a scalar, checking `0 < d < n`
    pub fn new(curve: &PrimeFieldCurve, d: &BigUint) -> Result<Self> {
        if !in_scalar_range(d, curve.n()) {
            return Err(Error::param("private_key", "scalar outside (0, n)"));
        }
        Ok(PrivateKey {
            bytes: Zeroizing::new(fixed_bytes(d, curve.order_len())?),
        })
    }

    /// Parse a fixed-width big-endian scalar
    pub fn from_bytes(curve: &PrimeFieldCurve, bytes: &[u8]) -> Result<Self> {
        validate::length("private key", bytes.len(), curve.order_len())?;
        Self::new(curve, &BigUint::from_bytes_be(bytes))
    }

    /// Big-endian encoding at the byte width of `n`
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        self.bytes.clone()
    }

    /// The scalar as an integer
    pub fn scalar(&self) -> BigUint {
        BigUint::from_bytes_be(&self.bytes)
    }

    /// Compute `[d]g`
    pub fn public_key(&self, curve: &PrimeFieldCurve) -> Result<CurvePoint> {
        curve.multiply_generator(&self.scalar())
    }
}

impl Zeroize for PrivateKey {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

/// An identity bound to a key pair together with its `Z` value
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundIdentity {
    id: Vec<u8>,
    z: Digest<32>,
}

impl BoundIdentity {
    /// The identity bytes
    pub fn id(&self) -> &[u8] {
        &self.id
    }

    /// The identity hash
    pub fn z(&self) -> &Digest<32> {
        &self.z
    }
}

/// A public key together with the `Z` value of its owner
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentifiedPublicKey {
    /// The public point
    pub public_key: CurvePoint,
    /// `Z` of the owner's identity
    pub z: Digest<32>,
}

impl IdentifiedPublicKey {
    /// Validate `public_key` and compute `Z` for `id`
    pub fn new(curve: &PrimeFieldCurve, id: &[u8], public_key: CurvePoint) -> Result<Self> {
        curve.check_point(&public_key)?;
        let z = identity_hash(curve, id, &public_key)?;
        Ok(IdentifiedPublicKey { public_key, z })
    }
}

/// A private key, its public key `[d]g`, and optionally a bound identity
#[derive(Clone, Debug)]
pub struct KeyPair {
    private_key: PrivateKey,
    public_key: CurvePoint,
    identity: Option<BoundIdentity>,
}

impl KeyPair {
    /// Draw a fresh key pair
    pub fn generate<R: CryptoRng + RngCore>(curve: &PrimeFieldCurve, rng: &mut R) -> Result<Self> {
        let (d, public_key) = curve.generate_keypair(rng)?;
        Ok(KeyPair {
            private_key: PrivateKey::new(curve, &d)?,
            public_key,
            identity: None,
        })
    }

    /// Rebuild a key pair from its private key
    pub fn from_private_key(curve: &PrimeFieldCurve, private_key: PrivateKey) -> Result<Self> {
        let public_key = private_key.public_key(curve)?;
        Ok(KeyPair {
            private_key,
            public_key,
            identity: None,
        })
    }

    /// Bind an identity, computing `Z` once
    ///
    /// A key pair can be bound only once; later calls fail and leave the
    /// existing binding untouched.
    pub fn bind_identity(&mut self, curve: &PrimeFieldCurve, id: &[u8]) -> Result<Digest<32>> {
        if self.identity.is_some() {
            return Err(Error::param("identity", "key pair already bound to an identity"));
        }
        let z = identity_hash(curve, id, &self.public_key)?;
        self.identity = Some(BoundIdentity {
            id: id.to_vec(),
            z,
        });
        Ok(z)
    }

    /// Builder form of [`bind_identity`](Self::bind_identity)
    pub fn with_identity(mut self, curve: &PrimeFieldCurve, id: &[u8]) -> Result<Self> {
        self.bind_identity(curve, id)?;
        Ok(self)
    }

    /// The private key
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// The public key
    pub fn public_key(&self) -> &CurvePoint {
        &self.public_key
    }

    /// The bound identity, if any
    pub fn identity(&self) -> Option<&BoundIdentity> {
        self.identity.as_ref()
    }

    /// `Z` of the bound identity, if any
    pub fn z(&self) -> Option<&Digest<32>> {
        self.identity.as_ref().map(|bound| &bound.z)
    }

    /// Public half of an identity-bound key pair
    pub fn identified_public_key(&self) -> Option<IdentifiedPublicKey> {
        self.z().map(|z| IdentifiedPublicKey {
            public_key: self.public_key.clone(),
            z: *z,
        })
    }
}
