//! Modular arithmetic helpers and integer encodings

use alloc::vec;
use alloc::vec::Vec;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// Big-endian encoding left-padded with zeros to exactly `len` bytes
///
/// Fails if `value` needs more than `len` bytes.
pub fn fixed_bytes(value: &BigUint, len: usize) -> Result<Vec<u8>> {
    if value.is_zero() {
        return Ok(vec![0u8; len]);
    }
    let bytes = value.to_bytes_be();
    if bytes.len() > len {
        return Err(Error::Length {
            context: "fixed-width integer encoding",
            expected: len,
            actual: bytes.len(),
        });
    }
    let mut out = vec![0u8; len - bytes.len()];
    out.extend_from_slice(&bytes);
    Ok(out)
}

/// Big-endian encoding with leading zero bytes stripped
///
/// Zero encodes as a single zero byte.
pub fn natural_bytes(value: &BigUint) -> Vec<u8> {
    value.to_bytes_be()
}

/// Number of bytes needed for `bits` bits
pub(crate) fn byte_len(bits: u64) -> usize {
    bits.div_ceil(8) as usize
}

pub(crate) fn add_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + b) % m
}

pub(crate) fn sub_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    let a = a % m;
    let b = b % m;
    if a >= b {
        a - b
    } else {
        m - b + a
    }
}

pub(crate) fn mul_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a * b) % m
}

pub(crate) fn neg_mod(a: &BigUint, m: &BigUint) -> BigUint {
    let a = a % m;
    if a.is_zero() {
        a
    } else {
        m - a
    }
}

pub(crate) fn inv_mod(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    (a % m).modinv(m).ok_or(Error::Processing {
        operation: "modular inverse",
        details: "value is not invertible",
    })
}

/// Square root modulo an odd prime, if one exists
///
/// Uses the `(p+1)/4` exponent when `p ≡ 3 (mod 4)` and Tonelli-Shanks
/// otherwise. Either root may be returned.
pub(crate) fn sqrt_mod(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    let a = a % p;
    if a.is_zero() {
        return Some(a);
    }
    let one = BigUint::one();
    let p_minus_one = p - &one;
    let legendre_exp = &p_minus_one >> 1u32;
    if a.modpow(&legendre_exp, p) != one {
        return None;
    }

    if (p % 4u32) == BigUint::from(3u32) {
        let root = a.modpow(&((p + &one) >> 2u32), p);
        return (mul_mod(&root, &root, p) == a).then_some(root);
    }

    // p - 1 = q * 2^s with q odd
    let s = p_minus_one.trailing_zeros()?;
    let q = &p_minus_one >> s;

    let mut z = BigUint::from(2u32);
    while z.modpow(&legendre_exp, p) != p_minus_one {
        z += 1u32;
        if &z >= p {
            return None;
        }
    }

    let mut m = s;
    let mut c = z.modpow(&q, p);
    let mut t = a.modpow(&q, p);
    let mut r = a.modpow(&((&q + &one) >> 1u32), p);

    while t != one {
        let mut i = 0u64;
        let mut t2 = t.clone();
        while t2 != one {
            t2 = mul_mod(&t2, &t2, p);
            i += 1;
            if i == m {
                return None;
            }
        }
        let mut b = c.clone();
        for _ in 0..(m - i - 1) {
            b = mul_mod(&b, &b, p);
        }
        m = i;
        c = mul_mod(&b, &b, p);
        t = mul_mod(&t, &c, p);
        r = mul_mod(&r, &b, p);
    }

    (mul_mod(&r, &r, p) == a).then_some(r)
}

pub(crate) fn is_odd(value: &BigUint) -> bool {
    value.is_odd()
}
