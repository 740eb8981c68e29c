//! Identity binding hash `Z`

use byteorder::{BigEndian, ByteOrder};

use crate::ec::{natural_bytes, CurvePoint, PrimeFieldCurve};
use crate::error::{validate, Error, Result};
use crate::hash::{HashFunction, Sm3};
use crate::types::Digest;
use gmcrypt_params::traditional::sm2::SM2_MAX_IDENTITY_LEN;

/// Compute `Z = SM3(ENTL || ID || a || b || gx || gy || px || py)`
///
/// `ENTL` is the bit length of `id` as a 16-bit big-endian integer. Curve
/// coefficients and coordinates enter in their natural big-endian encoding,
/// without padding to the field width.
pub fn identity_hash(
    curve: &PrimeFieldCurve,
    id: &[u8],
    public_key: &CurvePoint,
) -> Result<Digest<32>> {
    validate::max_length("identity", id.len(), SM2_MAX_IDENTITY_LEN)?;
    let (px, py) = public_key.coordinates().ok_or_else(|| {
        Error::param(
            "public_key",
            "point at infinity cannot be bound to an identity",
        )
    })?;
    let (gx, gy) = curve
        .generator()
        .coordinates()
        .ok_or_else(|| Error::param("generator", "point at infinity"))?;

    let mut entl = [0u8; 2];
    BigEndian::write_u16(&mut entl, (id.len() * 8) as u16);

    let mut hasher = Sm3::new();
    hasher.update(&entl)?;
    hasher.update(id)?;
    for value in [curve.a(), curve.b(), gx, gy, px, py] {
        hasher.update(&natural_bytes(value))?;
    }
    hasher.finalize()
}
