//! Curve parameters and the group law

use alloc::vec;
use alloc::vec::Vec;

use num_bigint::BigUint;
use num_traits::{Num, Zero};
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::field::{
    add_mod, byte_len, fixed_bytes, inv_mod, is_odd, mul_mod, neg_mod, sqrt_mod, sub_mod,
};
use super::point::{CurvePoint, PointFormat};
use crate::error::{validate, Error, Result};
use gmcrypt_params::traditional::sm2::{
    CurveParamsHex, POINT_COMPRESSED_EVEN, POINT_COMPRESSED_ODD, POINT_HYBRID_EVEN,
    POINT_HYBRID_ODD, POINT_INFINITY, POINT_UNCOMPRESSED, SM2_EXAMPLE_P256, SM2_MIN_FIELD_BITS,
    SM2_P256,
};

/// A short Weierstrass curve `y² = x³ + ax + b` over `F_p`
///
/// Holds the generator `g` of a subgroup of prime order `n` and the cofactor
/// `h`. All fields are fixed at construction; two curves built from the same
/// parameters compare equal and behave identically.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeFieldCurve {
    a: BigUint,
    b: BigUint,
    p: BigUint,
    g: CurvePoint,
    n: BigUint,
    h: BigUint,
}

impl PrimeFieldCurve {
    /// Build a curve without validating it
    ///
    /// Small toy curves are only constructible this way. Use
    /// [`validated`](Self::validated) for parameters of unknown origin.
    pub fn new(
        a: BigUint,
        b: BigUint,
        p: BigUint,
        gx: BigUint,
        gy: BigUint,
        n: BigUint,
        h: BigUint,
    ) -> Self {
        PrimeFieldCurve {
            a,
            b,
            p,
            g: CurvePoint::new(gx, gy),
            n,
            h,
        }
    }

    /// Build a curve and run [`check_curve`](Self::check_curve) and
    /// [`check_point`](Self::check_point) on the generator
    pub fn validated(
        a: BigUint,
        b: BigUint,
        p: BigUint,
        gx: BigUint,
        gy: BigUint,
        n: BigUint,
        h: BigUint,
    ) -> Result<Self> {
        let curve = Self::new(a, b, p, gx, gy, n, h);
        curve.check_curve()?;
        curve.check_point(&curve.g)?;
        Ok(curve)
    }

    /// Parse hex encoded parameters and validate the resulting curve
    pub fn from_hex(params: &CurveParamsHex) -> Result<Self> {
        let parse = |name: &'static str, value: &str| {
            BigUint::from_str_radix(value, 16)
                .map_err(|_| Error::param(name, "not a hexadecimal integer"))
        };
        Self::validated(
            parse("a", params.a)?,
            parse("b", params.b)?,
            parse("p", params.p)?,
            parse("gx", params.gx)?,
            parse("gy", params.gy)?,
            parse("n", params.n)?,
            parse("h", params.h)?,
        )
    }

    /// The recommended SM2 curve
    pub fn sm2() -> Result<Self> {
        Self::from_hex(&SM2_P256)
    }

    /// The curve of the GM/T 0003 worked examples
    pub fn sm2_example() -> Result<Self> {
        Self::from_hex(&SM2_EXAMPLE_P256)
    }

    /// Coefficient `a`
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `b`
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Field prime `p`
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Generator `g`
    pub fn generator(&self) -> &CurvePoint {
        &self.g
    }

    /// Order `n` of the generator
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Cofactor `h`
    pub fn h(&self) -> &BigUint {
        &self.h
    }

    /// Byte width of a field element, `ceil(bitlen(p) / 8)`
    pub fn field_len(&self) -> usize {
        byte_len(self.p.bits())
    }

    /// Byte width of a scalar, `ceil(bitlen(n) / 8)`
    pub fn order_len(&self) -> usize {
        byte_len(self.n.bits())
    }

    /// Reject singular curves and fields smaller than 2^191
    pub fn check_curve(&self) -> Result<()> {
        if self.p.bits() < SM2_MIN_FIELD_BITS {
            debug!(bits = self.p.bits(), "field prime too small");
            return Err(Error::InvalidDomainParameters {
                reason: "field prime is below 2^191",
            });
        }

        let p = &self.p;
        let a3 = mul_mod(&mul_mod(&self.a, &self.a, p), &self.a, p);
        let b2 = mul_mod(&self.b, &self.b, p);
        let discriminant = add_mod(
            &mul_mod(&BigUint::from(4u32), &a3, p),
            &mul_mod(&BigUint::from(27u32), &b2, p),
            p,
        );
        if discriminant.is_zero() {
            debug!("curve discriminant vanishes");
            return Err(Error::InvalidDomainParameters {
                reason: "4a^3 + 27b^2 is zero mod p",
            });
        }
        Ok(())
    }

    /// Check the curve equation for a finite point with reduced coordinates
    ///
    /// The point at infinity is reported as on the curve.
    pub fn is_on_curve(&self, point: &CurvePoint) -> bool {
        let (x, y) = match point.coordinates() {
            None => return true,
            Some(c) => c,
        };
        let p = &self.p;
        if x >= p || y >= p {
            return false;
        }
        mul_mod(y, y, p) == self.rhs(x)
    }

    /// Validate a point: on the curve, and annihilated by `n`
    ///
    /// The point at infinity always passes.
    pub fn check_point(&self, point: &CurvePoint) -> Result<()> {
        if point.is_identity() {
            return Ok(());
        }
        if !self.is_on_curve(point) {
            debug!("point does not satisfy the curve equation");
            return Err(Error::PointNotOnCurve {
                context: "check_point",
            });
        }
        if !self.multiply(point, &self.n)?.is_identity() {
            debug!("point is not in the subgroup generated by g");
            return Err(Error::InvalidSubgroup {
                context: "check_point",
            });
        }
        Ok(())
    }

    /// Negation `-P`
    pub fn negate(&self, point: &CurvePoint) -> CurvePoint {
        match point.coordinates() {
            None => CurvePoint::Infinity,
            Some((x, y)) => CurvePoint::new(x % &self.p, neg_mod(y, &self.p)),
        }
    }

    /// The group law `P + Q`
    ///
    /// Doubling is addition of a point to itself. Equal x coordinates with y
    /// coordinates that neither match nor cancel, or a denominator without an
    /// inverse, can only come from inputs that are not on the curve and are
    /// reported as errors.
    pub fn add(&self, lhs: &CurvePoint, rhs: &CurvePoint) -> Result<CurvePoint> {
        let (x1, y1) = match lhs.coordinates() {
            None => return Ok(rhs.clone()),
            Some(c) => c,
        };
        let (x2, y2) = match rhs.coordinates() {
            None => return Ok(lhs.clone()),
            Some(c) => c,
        };
        let p = &self.p;

        let slope = if x1 % p == x2 % p {
            if add_mod(y1, y2, p).is_zero() {
                return Ok(CurvePoint::Infinity);
            }
            if y1 % p != y2 % p {
                return Err(Error::Processing {
                    operation: "add",
                    details: "points share x but neither match nor cancel",
                });
            }
            // tangent: (3x² + a) / 2y
            let numerator = add_mod(&mul_mod(&BigUint::from(3u32), &mul_mod(x1, x1, p), p), &self.a, p);
            let denominator = mul_mod(&BigUint::from(2u32), y1, p);
            mul_mod(&numerator, &inv_mod(&denominator, p)?, p)
        } else {
            // secant: (y1 - y2) / (x1 - x2)
            let numerator = sub_mod(y1, y2, p);
            let denominator = sub_mod(x1, x2, p);
            mul_mod(&numerator, &inv_mod(&denominator, p)?, p)
        };

        let x3 = sub_mod(&sub_mod(&mul_mod(&slope, &slope, p), x1, p), x2, p);
        let y3 = neg_mod(&add_mod(y1, &mul_mod(&slope, &sub_mod(&x3, x1, p), p), p), p);
        Ok(CurvePoint::new(x3, y3))
    }

    /// Point doubling `2P`
    pub fn double(&self, point: &CurvePoint) -> Result<CurvePoint> {
        self.add(point, point)
    }

    /// Scalar multiplication `[k]P` by double-and-add
    ///
    /// Scans `k` from the least significant bit; the running total starts at
    /// infinity. Which additions happen depends on the bits of `k`.
    pub fn multiply(&self, point: &CurvePoint, k: &BigUint) -> Result<CurvePoint> {
        let mut result = CurvePoint::Infinity;
        let mut addend = point.clone();
        let bits = k.bits();
        for i in 0..bits {
            if k.bit(i) {
                result = self.add(&result, &addend)?;
            }
            if i + 1 < bits {
                addend = self.double(&addend)?;
            }
        }
        Ok(result)
    }

    /// Scalar multiplication `[k]P` by Montgomery ladder
    ///
    /// Performs one addition and one doubling per bit over
    /// `max(bitlen(n), bitlen(k))` bits, so the sequence of group operations
    /// does not depend on the value of `k`. Same result as
    /// [`multiply`](Self::multiply).
    pub fn multiply_ladder(&self, point: &CurvePoint, k: &BigUint) -> Result<CurvePoint> {
        let mut r0 = CurvePoint::Infinity;
        let mut r1 = point.clone();
        let bits = core::cmp::max(self.n.bits(), k.bits());
        for i in (0..bits).rev() {
            if k.bit(i) {
                r0 = self.add(&r0, &r1)?;
                r1 = self.double(&r1)?;
            } else {
                r1 = self.add(&r0, &r1)?;
                r0 = self.double(&r0)?;
            }
        }
        Ok(r0)
    }

    /// `[k]g`
    pub fn multiply_generator(&self, k: &BigUint) -> Result<CurvePoint> {
        self.multiply(&self.g, k)
    }

    /// Draw a uniform scalar from `(0, n)`
    ///
    /// Samples `bitlen(n)` random bits and redraws until the value lies in range.
    pub fn random_scalar<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<BigUint> {
        let bits = self.n.bits();
        validate::parameter(bits > 1, "n", "curve order must exceed 1")?;
        let len = byte_len(bits);
        let excess = (len as u64 * 8 - bits) as u32;
        let mut buf = Zeroizing::new(vec![0u8; len]);
        loop {
            rng.try_fill_bytes(&mut buf)
                .map_err(|_| Error::RandomGeneration {
                    context: "random_scalar",
                })?;
            buf[0] &= 0xFFu8 >> excess;
            let k = BigUint::from_bytes_be(&buf);
            if in_scalar_range(&k, &self.n) {
                return Ok(k);
            }
            trace!("scalar draw outside (0, n), redrawing");
        }
    }

    /// Draw a private key from `(0, n)` and derive its validated public key
    pub fn generate_keypair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> Result<(BigUint, CurvePoint)> {
        let d = self.random_scalar(rng)?;
        let public_key = self.multiply_generator(&d)?;
        self.check_point(&public_key)?;
        Ok((d, public_key))
    }

    /// Serialize a point
    ///
    /// Coordinates are fixed-width big-endian of [`field_len`](Self::field_len)
    /// bytes. The point at infinity is the single byte `0x00`.
    pub fn encode_point(&self, point: &CurvePoint, format: PointFormat) -> Result<Vec<u8>> {
        let (x, y) = match point.coordinates() {
            None => return Ok(vec![POINT_INFINITY]),
            Some(c) => c,
        };
        let len = self.field_len();
        let odd = is_odd(y) as u8;

        let (prefix, with_y) = match format {
            PointFormat::Uncompressed => (POINT_UNCOMPRESSED, true),
            PointFormat::Compressed => (POINT_COMPRESSED_EVEN | odd, false),
            PointFormat::Hybrid => (POINT_HYBRID_EVEN | odd, true),
        };

        let mut out = Vec::with_capacity(1 + 2 * len);
        out.push(prefix);
        out.extend_from_slice(&fixed_bytes(x, len)?);
        if with_y {
            out.extend_from_slice(&fixed_bytes(y, len)?);
        }
        Ok(out)
    }

    /// Parse and validate a point in any [`PointFormat`] or the infinity encoding
    ///
    /// The result satisfies the curve equation; subgroup membership is left
    /// to [`check_point`](Self::check_point).
    pub fn decode_point(&self, bytes: &[u8]) -> Result<CurvePoint> {
        validate::min_length("point encoding", bytes.len(), 1)?;
        let len = self.field_len();
        let prefix = bytes[0];

        let point = match prefix {
            POINT_INFINITY => {
                validate::length("point at infinity encoding", bytes.len(), 1)?;
                return Ok(CurvePoint::Infinity);
            }
            POINT_UNCOMPRESSED | POINT_HYBRID_EVEN | POINT_HYBRID_ODD => {
                validate::length("uncompressed point", bytes.len(), 1 + 2 * len)?;
                let x = BigUint::from_bytes_be(&bytes[1..1 + len]);
                let y = BigUint::from_bytes_be(&bytes[1 + len..]);
                if prefix != POINT_UNCOMPRESSED && is_odd(&y) != (prefix == POINT_HYBRID_ODD) {
                    return Err(Error::param("point encoding", "hybrid prefix disagrees with y parity"));
                }
                CurvePoint::new(x, y)
            }
            POINT_COMPRESSED_EVEN | POINT_COMPRESSED_ODD => {
                validate::length("compressed point", bytes.len(), 1 + len)?;
                let x = BigUint::from_bytes_be(&bytes[1..]);
                if x >= self.p {
                    return Err(Error::PointNotOnCurve {
                        context: "decode_point",
                    });
                }
                let root = sqrt_mod(&self.rhs(&x), &self.p).ok_or(Error::PointNotOnCurve {
                    context: "decode_point",
                })?;
                let want_odd = prefix == POINT_COMPRESSED_ODD;
                let y = if is_odd(&root) == want_odd {
                    root
                } else {
                    neg_mod(&root, &self.p)
                };
                if is_odd(&y) != want_odd {
                    // y = 0 has no odd counterpart
                    return Err(Error::PointNotOnCurve {
                        context: "decode_point",
                    });
                }
                CurvePoint::new(x, y)
            }
            _ => return Err(Error::param("point encoding", "unknown prefix byte")),
        };

        if !self.is_on_curve(&point) {
            debug!(prefix, "decoded point is not on the curve");
            return Err(Error::PointNotOnCurve {
                context: "decode_point",
            });
        }
        Ok(point)
    }

    /// Encode a scalar at the fixed width of `n`
    pub fn encode_scalar(&self, k: &BigUint) -> Result<Vec<u8>> {
        fixed_bytes(k, self.order_len())
    }

    /// `x³ + ax + b mod p`
    fn rhs(&self, x: &BigUint) -> BigUint {
        let p = &self.p;
        let x3 = mul_mod(&mul_mod(x, x, p), x, p);
        add_mod(&add_mod(&x3, &mul_mod(&self.a, x, p), p), &self.b, p)
    }
}

/// `true` if `k` lies in `(0, n)`
pub fn in_scalar_range(k: &BigUint, n: &BigUint) -> bool {
    !k.is_zero() && k < n
}
