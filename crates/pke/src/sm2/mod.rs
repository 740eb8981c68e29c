//! SM2 encryption engine

mod ciphertext;

pub use ciphertext::Sm2Ciphertext;

use alloc::vec::Vec;

use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use gmcrypt_algorithms::ec::{fixed_bytes, CurvePoint, PointFormat, PrimeFieldCurve};
use gmcrypt_algorithms::hash::{HashFunction, Sm3};
use gmcrypt_algorithms::kdf::kdf;
use gmcrypt_algorithms::sm2::{KeyPair, PrivateKey};
use gmcrypt_api::{Error as ApiError, Pke, Result as ApiResult};
use gmcrypt_internal::constant_time::{ct_eq, ct_is_zero, xor_in_place};
use gmcrypt_params::utils::hash::SM3_OUTPUT_SIZE;

/// SM2 encryptor and decryptor bound to one curve
#[derive(Clone, Copy, Debug)]
pub struct Sm2Encryptor<'a> {
    curve: &'a PrimeFieldCurve,
    format: PointFormat,
}

impl<'a> Sm2Encryptor<'a> {
    /// Create an engine for `curve` that writes `C1` uncompressed
    pub fn new(curve: &'a PrimeFieldCurve) -> Self {
        Sm2Encryptor {
            curve,
            format: PointFormat::Uncompressed,
        }
    }

    /// Write `C1` in `format` instead
    pub fn with_point_format(mut self, format: PointFormat) -> Self {
        self.format = format;
        self
    }

    /// The curve this engine works on
    pub fn curve(&self) -> &'a PrimeFieldCurve {
        self.curve
    }

    /// Encrypt a non-empty `message` to `public_key`
    ///
    /// Redraws `k` whenever `[k]P` is the point at infinity or the keystream
    /// comes out all zero.
    pub fn encrypt<R: CryptoRng + RngCore>(
        &self,
        public_key: &CurvePoint,
        message: &[u8],
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        if message.is_empty() {
            return Err(Error::InvalidParameter("plaintext must not be empty"));
        }
        if public_key.is_identity() {
            return Err(Error::InvalidPublicKey("point at infinity"));
        }
        self.curve.check_point(public_key)?;
        if self.curve.multiply(public_key, self.curve.h())?.is_identity() {
            debug!("[h]P is the point at infinity");
            return Err(Error::InvalidPublicKey("[h]P is the point at infinity"));
        }

        let field_len = self.curve.field_len();
        loop {
            let k = self.curve.random_scalar(rng)?;
            let (x2, y2) = match self.curve.multiply(public_key, &k)? {
                CurvePoint::Affine { x, y } => (
                    Zeroizing::new(fixed_bytes(&x, field_len)?),
                    Zeroizing::new(fixed_bytes(&y, field_len)?),
                ),
                CurvePoint::Infinity => {
                    trace!("[k]P at infinity, redrawing k");
                    continue;
                }
            };

            let mut keystream = kdf(message.len(), &[&x2, &y2])?;
            if ct_is_zero(&keystream) {
                trace!("all-zero keystream, redrawing k");
                continue;
            }

            let c1 = self.curve.multiply_generator(&k)?;
            xor_in_place(&mut keystream, message);
            let c2 = keystream.to_vec();
            let c3 = Self::integrity_tag(&x2, message, &y2)?;

            return Sm2Ciphertext::new(c1, c2, c3).to_bytes(self.curve, self.format);
        }
    }

    /// Decrypt and authenticate `ciphertext`
    ///
    /// `C1` is validated before the private key is applied to it. No
    /// plaintext is returned unless `C3` matches.
    pub fn decrypt(&self, private_key: &PrivateKey, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let parsed = Sm2Ciphertext::parse(self.curve, ciphertext)?;
        let c1 = parsed.c1();
        if c1.is_identity() {
            return Err(Error::InvalidCiphertextFormat("C1 is the point at infinity"));
        }
        self.curve.check_point(c1)?;
        if self.curve.multiply(c1, self.curve.h())?.is_identity() {
            debug!("[h]C1 is the point at infinity");
            return Err(Error::DecryptionFailed("[h]C1 is the point at infinity"));
        }

        let field_len = self.curve.field_len();
        let (x2, y2) = match self.curve.multiply(c1, &private_key.scalar())? {
            CurvePoint::Affine { x, y } => (
                Zeroizing::new(fixed_bytes(&x, field_len)?),
                Zeroizing::new(fixed_bytes(&y, field_len)?),
            ),
            CurvePoint::Infinity => return Err(Error::DecryptionFailed("[d]C1 at infinity")),
        };

        let mut plaintext = kdf(parsed.c2().len(), &[&x2, &y2])?;
        if ct_is_zero(&plaintext) {
            debug!("all-zero keystream while decrypting");
            return Err(Error::DecryptionFailed("all-zero keystream"));
        }
        xor_in_place(&mut plaintext, parsed.c2());

        let tag = Self::integrity_tag(&x2, &plaintext, &y2)?;
        if !ct_eq(tag, parsed.c3()) {
            debug!("C3 mismatch");
            return Err(Error::IntegrityCheckFailed);
        }
        Ok(plaintext.to_vec())
    }

    /// `C3 = SM3(x2 || M || y2)`
    fn integrity_tag(x2: &[u8], message: &[u8], y2: &[u8]) -> Result<[u8; SM3_OUTPUT_SIZE]> {
        let mut hasher = Sm3::new();
        hasher.update(x2)?;
        hasher.update(message)?;
        hasher.update(y2)?;
        Ok(hasher.finalize()?.into_array())
    }
}

impl<'a> Pke for Sm2Encryptor<'a> {
    type PublicKey = CurvePoint;
    type SecretKey = PrivateKey;
    type Ciphertext = Vec<u8>;

    fn name(&self) -> &'static str {
        "SM2-ENC"
    }

    fn keypair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        let keypair = KeyPair::generate(self.curve, rng).map_err(ApiError::from)?;
        Ok((keypair.public_key().clone(), keypair.private_key().clone()))
    }

    fn encrypt<R: RngCore + CryptoRng>(
        &self,
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        rng: &mut R,
    ) -> ApiResult<Self::Ciphertext> {
        Sm2Encryptor::encrypt(self, pk_recipient, plaintext, rng).map_err(ApiError::from)
    }

    fn decrypt(&self, sk_recipient: &Self::SecretKey, ciphertext: &[u8]) -> ApiResult<Vec<u8>> {
        Sm2Encryptor::decrypt(self, sk_recipient, ciphertext).map_err(ApiError::from)
    }
}
