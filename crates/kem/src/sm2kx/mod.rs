//! SM2 authenticated key exchange
//!
//! Each party holds an identity-bound static key pair and draws an
//! ephemeral key pair per exchange. The parties swap [`AgreementInfo`],
//! derive the same key from the shared point `U`, and confirm it with
//! role-labelled SM3 tags: the responder sends the `0x02` tag, the
//! initiator the `0x03` tag.
//!
//! [`Sm2KeyExchange`] is the stateless engine. [`KeyExchangeSession`]
//! drives one party through the exchange and rejects out-of-order calls.

mod session;

pub use session::{KeyExchangeSession, SessionState};

use num_bigint::BigUint;
use num_traits::One;
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{validate, Error, Result};
use gmcrypt_algorithms::ec::{natural_bytes, CurvePoint, PrimeFieldCurve};
use gmcrypt_algorithms::hash::{HashFunction, Sm3};
use gmcrypt_algorithms::kdf::kdf;
use gmcrypt_algorithms::sm2::KeyPair;
use gmcrypt_algorithms::types::Digest;
use gmcrypt_algorithms::Error as PrimitiveError;
use gmcrypt_api::{Error as ApiError, KeyAgreement, Result as ApiResult};
use gmcrypt_common::SecretVec;
use gmcrypt_internal::constant_time::ct_eq;
use gmcrypt_params::traditional::sm2::{
    SM2_KX_INITIATOR_TAG_PREFIX, SM2_KX_MAX_KEY_LEN, SM2_KX_RESPONDER_TAG_PREFIX,
};
use gmcrypt_params::utils::hash::SM3_OUTPUT_SIZE;

/// A confirmation tag
pub type Tag = [u8; SM3_OUTPUT_SIZE];

/// Material one party reveals to the other
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgreementInfo {
    /// Whether the sender is the initiator
    pub is_initiator: bool,
    /// Requested key length in bytes
    pub key_len: usize,
    /// `Z` of the sender's static key
    pub z: Digest<SM3_OUTPUT_SIZE>,
    /// The sender's static public key
    pub static_public_key: CurvePoint,
    /// The sender's ephemeral public key `R`
    pub ephemeral_public_key: CurvePoint,
    /// The sender's confirmation tag, once it has derived the key
    pub tag: Option<Tag>,
}

/// Outcome of one party's side of the exchange
#[derive(Debug)]
pub struct AgreementResult {
    tag: Tag,
    shared_secret: SecretVec,
    expected_peer_tag: Tag,
    peer_confirmed: bool,
}

impl AgreementResult {
    /// Tag to send to the peer
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// The derived key
    pub fn shared_secret(&self) -> &SecretVec {
        &self.shared_secret
    }

    /// Consume the result, keeping only the derived key
    pub fn into_shared_secret(self) -> SecretVec {
        self.shared_secret
    }

    /// Whether the peer's tag has been checked
    pub fn is_peer_confirmed(&self) -> bool {
        self.peer_confirmed
    }

    /// Check a tag the peer sent after this side derived the key
    pub fn confirm(&mut self, peer_tag: &[u8]) -> Result<()> {
        if !ct_eq(self.expected_peer_tag, peer_tag) {
            debug!("peer confirmation tag mismatch");
            return Err(Error::TAG_MISMATCH);
        }
        self.peer_confirmed = true;
        Ok(())
    }
}

/// SM2 key exchange engine bound to one curve
#[derive(Clone, Copy, Debug)]
pub struct Sm2KeyExchange<'a> {
    curve: &'a PrimeFieldCurve,
}

impl<'a> Sm2KeyExchange<'a> {
    /// Create an engine for `curve`
    pub fn new(curve: &'a PrimeFieldCurve) -> Self {
        Sm2KeyExchange { curve }
    }

    /// The curve this engine works on
    pub fn curve(&self) -> &'a PrimeFieldCurve {
        self.curve
    }

    /// Assemble the info this party sends
    pub fn public_info(
        &self,
        own_static: &KeyPair,
        own_ephemeral: &KeyPair,
        is_initiator: bool,
        key_len: usize,
        tag: Option<Tag>,
    ) -> Result<AgreementInfo> {
        let z = static_z(own_static)?;
        Ok(AgreementInfo {
            is_initiator,
            key_len,
            z: *z,
            static_public_key: own_static.public_key().clone(),
            ephemeral_public_key: own_ephemeral.public_key().clone(),
            tag,
        })
    }

    /// Run this party's side of the exchange against `peer`
    ///
    /// The local role is the opposite of the peer's and the key length is
    /// the peer's, capped at `SM2_KX_MAX_KEY_LEN`. When the peer included
    /// its tag, the tag is checked here.
    pub fn agree(
        &self,
        own_static: &KeyPair,
        own_ephemeral: &KeyPair,
        peer: &AgreementInfo,
    ) -> Result<AgreementResult> {
        let is_initiator = !peer.is_initiator;
        let own_z = static_z(own_static)?;
        if peer.key_len == 0 {
            return Err(PrimitiveError::param("key_len", "key length must be positive").into());
        }
        if peer.key_len > SM2_KX_MAX_KEY_LEN {
            debug!(key_len = peer.key_len, "peer requested an oversized key");
            return Err(Error::KEY_LENGTH_MISMATCH);
        }
        self.check_peer_point(&peer.ephemeral_public_key)?;
        self.check_peer_point(&peer.static_public_key)?;

        let n = self.curve.n();
        let own_r = own_ephemeral.public_key();
        let x_own = self.truncated_x(own_r)?;
        let t = (own_static.private_key().scalar() + x_own * own_ephemeral.private_key().scalar())
            % n;

        let x_peer = self.truncated_x(&peer.ephemeral_public_key)?;
        let shifted = self.curve.multiply(&peer.ephemeral_public_key, &x_peer)?;
        let base = self.curve.add(&peer.static_public_key, &shifted)?;
        let u = self.curve.multiply(&base, &(self.curve.h() * t))?;
        let (ux, uy) = match u.coordinates() {
            Some((x, y)) => (Zeroizing::new(natural_bytes(x)), Zeroizing::new(natural_bytes(y))),
            None => {
                debug!("shared point U is the point at infinity");
                return Err(Error::POINT_AT_INFINITY);
            }
        };

        let (z_init, z_resp) = if is_initiator {
            (own_z, &peer.z)
        } else {
            (&peer.z, own_z)
        };
        let (r_init, r_resp) = if is_initiator {
            (own_r, &peer.ephemeral_public_key)
        } else {
            (&peer.ephemeral_public_key, own_r)
        };

        let shared = kdf(
            peer.key_len,
            &[&ux, &uy, z_init.as_ref(), z_resp.as_ref()],
        )?;

        let inner = inner_hash(&ux, z_init, z_resp, r_init, r_resp)?;
        let (own_prefix, peer_prefix) = if is_initiator {
            (SM2_KX_INITIATOR_TAG_PREFIX, SM2_KX_RESPONDER_TAG_PREFIX)
        } else {
            (SM2_KX_RESPONDER_TAG_PREFIX, SM2_KX_INITIATOR_TAG_PREFIX)
        };
        let mut result = AgreementResult {
            tag: confirmation_tag(own_prefix, &uy, &inner)?,
            shared_secret: SecretVec::from_slice(&shared),
            expected_peer_tag: confirmation_tag(peer_prefix, &uy, &inner)?,
            peer_confirmed: false,
        };
        if let Some(peer_tag) = &peer.tag {
            result.confirm(peer_tag)?;
        }
        Ok(result)
    }

    fn check_peer_point(&self, point: &CurvePoint) -> Result<()> {
        if point.is_identity() || self.curve.check_point(point).is_err() {
            debug!("peer point failed validation");
            return Err(Error::CURVE_MISMATCH);
        }
        Ok(())
    }

    /// `2^w + (x mod 2^w)` with `w = ceil(bits(n) / 2) - 1`
    fn truncated_x(&self, point: &CurvePoint) -> Result<BigUint> {
        let x = point.x().ok_or(Error::POINT_AT_INFINITY)?;
        let w = (self.curve.n().bits() + 1) / 2 - 1;
        let two_w = BigUint::one() << w;
        let mask = &two_w - BigUint::one();
        Ok(two_w + (x & &mask))
    }
}

fn static_z(keypair: &KeyPair) -> Result<&Digest<SM3_OUTPUT_SIZE>> {
    keypair.z().ok_or(Error::InvalidKey {
        key_type: "static",
        reason: "no identity bound",
    })
}

/// `SM3(U.x || Z_init || Z_resp || R_init.x || R_init.y || R_resp.x || R_resp.y)`
fn inner_hash(
    ux: &[u8],
    z_init: &Digest<SM3_OUTPUT_SIZE>,
    z_resp: &Digest<SM3_OUTPUT_SIZE>,
    r_init: &CurvePoint,
    r_resp: &CurvePoint,
) -> Result<Digest<SM3_OUTPUT_SIZE>> {
    let (xi, yi) = r_init.coordinates().ok_or(Error::POINT_AT_INFINITY)?;
    let (xr, yr) = r_resp.coordinates().ok_or(Error::POINT_AT_INFINITY)?;

    let mut hasher = Sm3::new();
    hasher.update(ux)?;
    hasher.update(z_init)?;
    hasher.update(z_resp)?;
    for coordinate in [xi, yi, xr, yr] {
        hasher.update(&natural_bytes(coordinate))?;
    }
    Ok(hasher.finalize()?)
}

fn confirmation_tag(prefix: u8, uy: &[u8], inner: &Digest<SM3_OUTPUT_SIZE>) -> Result<Tag> {
    let mut hasher = Sm3::new();
    hasher.update(&[prefix])?;
    hasher.update(uy)?;
    hasher.update(inner)?;
    Ok(hasher.finalize()?.into_array())
}

impl<'a> KeyAgreement for Sm2KeyExchange<'a> {
    type StaticKey = KeyPair;
    type EphemeralKey = KeyPair;
    type PublicInfo = AgreementInfo;
    type Output = AgreementResult;

    fn name(&self) -> &'static str {
        "SM2-KX"
    }

    fn ephemeral<R: CryptoRng + RngCore>(&self, rng: &mut R) -> ApiResult<Self::EphemeralKey> {
        KeyPair::generate(self.curve, rng).map_err(ApiError::from)
    }

    fn agree(
        &self,
        own_static: &Self::StaticKey,
        own_ephemeral: &Self::EphemeralKey,
        peer: &Self::PublicInfo,
    ) -> ApiResult<Self::Output> {
        Sm2KeyExchange::agree(self, own_static, own_ephemeral, peer).map_err(ApiError::from)
    }
}

// Role checks shared with the session
pub(crate) fn check_roles(own_is_initiator: bool, peer: &AgreementInfo, key_len: usize) -> Result<()> {
    validate::agreement(own_is_initiator != peer.is_initiator, "role mismatch")?;
    validate::agreement(key_len == peer.key_len, "key length mismatch")
}
