//! `C1 || C2 || C3` framing

use alloc::vec::Vec;

use crate::error::{Error, Result};
use gmcrypt_algorithms::ec::{CurvePoint, PointFormat, PrimeFieldCurve};
use gmcrypt_params::traditional::sm2::{
    POINT_COMPRESSED_EVEN, POINT_COMPRESSED_ODD, POINT_HYBRID_EVEN, POINT_HYBRID_ODD,
    POINT_UNCOMPRESSED,
};
use gmcrypt_params::utils::hash::SM3_OUTPUT_SIZE;

/// A parsed SM2 ciphertext
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sm2Ciphertext {
    c1: CurvePoint,
    c2: Vec<u8>,
    c3: [u8; SM3_OUTPUT_SIZE],
}

impl Sm2Ciphertext {
    pub(crate) fn new(c1: CurvePoint, c2: Vec<u8>, c3: [u8; SM3_OUTPUT_SIZE]) -> Self {
        Sm2Ciphertext { c1, c2, c3 }
    }

    /// Split `bytes` into its components
    ///
    /// The length of `C1` follows from its prefix byte, so any point format
    /// is accepted. `C1` must satisfy the curve equation; subgroup membership
    /// is checked at decryption.
    pub fn parse(curve: &PrimeFieldCurve, bytes: &[u8]) -> Result<Self> {
        let field_len = curve.field_len();
        let c1_len = match bytes.first() {
            Some(&POINT_UNCOMPRESSED) | Some(&POINT_HYBRID_EVEN) | Some(&POINT_HYBRID_ODD) => {
                1 + 2 * field_len
            }
            Some(&POINT_COMPRESSED_EVEN) | Some(&POINT_COMPRESSED_ODD) => 1 + field_len,
            Some(_) => return Err(Error::InvalidCiphertextFormat("unknown C1 prefix")),
            None => return Err(Error::InvalidCiphertextFormat("empty ciphertext")),
        };
        if bytes.len() <= c1_len + SM3_OUTPUT_SIZE {
            return Err(Error::InvalidCiphertextFormat("ciphertext too short"));
        }

        let c1 = curve.decode_point(&bytes[..c1_len])?;
        let c2 = bytes[c1_len..bytes.len() - SM3_OUTPUT_SIZE].to_vec();
        let mut c3 = [0u8; SM3_OUTPUT_SIZE];
        c3.copy_from_slice(&bytes[bytes.len() - SM3_OUTPUT_SIZE..]);
        Ok(Sm2Ciphertext { c1, c2, c3 })
    }

    /// Serialize with `C1` in `format`
    pub fn to_bytes(&self, curve: &PrimeFieldCurve, format: PointFormat) -> Result<Vec<u8>> {
        let mut out = curve.encode_point(&self.c1, format)?;
        out.extend_from_slice(&self.c2);
        out.extend_from_slice(&self.c3);
        Ok(out)
    }

    /// The ephemeral point `[k]G`
    pub fn c1(&self) -> &CurvePoint {
        &self.c1
    }

    /// The masked message
    pub fn c2(&self) -> &[u8] {
        &self.c2
    }

    /// The integrity tag
    pub fn c3(&self) -> &[u8; SM3_OUTPUT_SIZE] {
        &self.c3
    }
}
