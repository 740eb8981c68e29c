//! SM2 signature engine

mod signature;

pub use signature::Signature;

use alloc::string::ToString;

use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use gmcrypt_algorithms::ec::{CurvePoint, PrimeFieldCurve};
use gmcrypt_algorithms::hash::{HashFunction, Sm3};
use gmcrypt_algorithms::sm2::{identity_hash, IdentifiedPublicKey, KeyPair, PrivateKey};
use gmcrypt_algorithms::types::Digest;
use gmcrypt_api::{Error as ApiError, Result as ApiResult, Signature as SignatureTrait};
use gmcrypt_params::traditional::sm2::SM2_DEFAULT_ID;

/// SM2 signer and verifier bound to one curve
#[derive(Clone, Copy, Debug)]
pub struct Sm2Signer<'a> {
    curve: &'a PrimeFieldCurve,
}

impl<'a> Sm2Signer<'a> {
    /// Create an engine for `curve`
    pub fn new(curve: &'a PrimeFieldCurve) -> Self {
        Sm2Signer { curve }
    }

    /// The curve this engine works on
    pub fn curve(&self) -> &'a PrimeFieldCurve {
        self.curve
    }

    /// The message digest `e = SM3(Z || M)`
    pub fn digest_message(z: &[u8], message: &[u8]) -> Result<Digest<32>> {
        let mut hasher = Sm3::new();
        hasher.update(z)?;
        hasher.update(message)?;
        Ok(hasher.finalize()?)
    }

    /// Sign `message` on behalf of the identity hashed into `z`
    ///
    /// Draws a fresh `k` from `rng` and redraws it until `r ∉ {0, n - k}`
    /// and `s ≠ 0`. Fails with [`Error::InvalidKey`] for `d = n - 1`, which
    /// has no `(1 + d)^-1`.
    pub fn sign<R: CryptoRng + RngCore>(
        &self,
        private_key: &PrivateKey,
        z: &[u8],
        message: &[u8],
        rng: &mut R,
    ) -> Result<Signature> {
        let n = self.curve.n();
        let d = private_key.scalar();
        let d_plus_one_inv = (&d + 1u32)
            .modinv(n)
            .ok_or_else(|| Error::InvalidKey("1 + d is not invertible mod n".into()))?;

        let e = BigUint::from_bytes_be(Self::digest_message(z, message)?.as_ref());

        loop {
            let k = self.curve.random_scalar(rng)?;
            let kg = self.curve.multiply_generator(&k)?;
            let x1 = match kg.x() {
                Some(x) => x,
                None => {
                    trace!("[k]G at infinity, redrawing k");
                    continue;
                }
            };

            let r = (&e + x1) % n;
            if r.is_zero() || &r + &k == *n {
                trace!("degenerate r, redrawing k");
                continue;
            }

            let rd = (&r * &d) % n;
            let s = (&d_plus_one_inv * ((&k + n - rd) % n)) % n;
            if s.is_zero() {
                trace!("s = 0, redrawing k");
                continue;
            }

            return Ok(Signature::new(r, s));
        }
    }

    /// Verify `signature` over `message` for the identity hashed into `z`
    ///
    /// Never fails: malformed keys, out-of-range components and every other
    /// error all yield `false`.
    pub fn verify(
        &self,
        public_key: &CurvePoint,
        z: &[u8],
        signature: &Signature,
        message: &[u8],
    ) -> bool {
        match self.verify_inner(public_key, z, signature, message) {
            Ok(valid) => valid,
            Err(err) => {
                debug!(error = %err, "SM2 verification aborted");
                false
            }
        }
    }

    fn verify_inner(
        &self,
        public_key: &CurvePoint,
        z: &[u8],
        signature: &Signature,
        message: &[u8],
    ) -> Result<bool> {
        let n = self.curve.n();
        let (r, s) = (signature.r(), signature.s());
        if r.is_zero() || r >= n || s.is_zero() || s >= n {
            debug!("signature component outside (0, n)");
            return Ok(false);
        }
        if public_key.is_identity() {
            debug!("public key is the point at infinity");
            return Ok(false);
        }
        self.curve.check_point(public_key)?;

        let e = BigUint::from_bytes_be(Self::digest_message(z, message)?.as_ref());
        let t = (r + s) % n;
        if t.is_zero() {
            debug!("r + s = 0 mod n");
            return Ok(false);
        }

        let sg = self.curve.multiply_generator(s)?;
        let tp = self.curve.multiply(public_key, &t)?;
        let x1 = match self.curve.add(&sg, &tp)?.x() {
            Some(x) => x.clone(),
            None => return Ok(false),
        };

        Ok((e + x1) % n == *r)
    }

    /// Sign with the identity bound to `keypair`
    pub fn sign_with_identity<R: CryptoRng + RngCore>(
        &self,
        keypair: &KeyPair,
        message: &[u8],
        rng: &mut R,
    ) -> Result<Signature> {
        let z = keypair
            .z()
            .ok_or_else(|| Error::InvalidParameter("key pair has no bound identity".into()))?;
        self.sign(keypair.private_key(), z.as_ref(), message, rng)
    }

    /// Verify against `public_key` claiming identity `id`
    pub fn verify_with_identity(
        &self,
        public_key: &CurvePoint,
        id: &[u8],
        signature: &Signature,
        message: &[u8],
    ) -> bool {
        match identity_hash(self.curve, id, public_key) {
            Ok(z) => self.verify(public_key, z.as_ref(), signature, message),
            Err(err) => {
                debug!(error = %err, "cannot compute Z for verification");
                false
            }
        }
    }
}

impl<'a> SignatureTrait for Sm2Signer<'a> {
    type PublicKey = IdentifiedPublicKey;
    type SecretKey = PrivateKey;
    type SignatureData = Signature;
    type KeyPair = KeyPair;

    fn name(&self) -> &'static str {
        "SM2"
    }

    /// Generate a key pair bound to the default identity `1234567812345678`
    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> ApiResult<Self::KeyPair> {
        let keypair = KeyPair::generate(self.curve, rng)?;
        Ok(keypair.with_identity(self.curve, SM2_DEFAULT_ID)?)
    }

    fn public_key(&self, keypair: &Self::KeyPair) -> ApiResult<Self::PublicKey> {
        keypair
            .identified_public_key()
            .ok_or_else(|| ApiError::InvalidKey {
                context: "SM2 public key",
                message: "key pair has no bound identity".to_string(),
            })
    }

    fn sign<R: CryptoRng + RngCore>(
        &self,
        message: &[u8],
        keypair: &Self::KeyPair,
        rng: &mut R,
    ) -> ApiResult<Self::SignatureData> {
        Ok(self.sign_with_identity(keypair, message, rng)?)
    }

    fn verify(
        &self,
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        if Sm2Signer::verify(self, &public_key.public_key, public_key.z.as_ref(), signature, message) {
            Ok(())
        } else {
            Err(ApiError::InvalidSignature {
                context: "SM2 verify",
                message: "signature does not verify".to_string(),
            })
        }
    }
}
