//! SM2 signature value and its encodings

use alloc::format;
use alloc::vec::Vec;

use num_bigint::BigUint;

use crate::error::{Error, Result};
use gmcrypt_algorithms::ec::{fixed_bytes, PrimeFieldCurve};

const DER_SEQUENCE: u8 = 0x30;
const DER_INTEGER: u8 = 0x02;

/// An SM2 signature `(r, s)`
///
/// Parsing checks structure only; whether `r` and `s` lie in `(0, n)` is
/// decided by verification.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Assemble a signature from its components
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Signature { r, s }
    }

    /// The `r` component
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The `s` component
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// `r || s`, each padded to the byte width of the curve order
    pub fn to_bytes(&self, curve: &PrimeFieldCurve) -> Result<Vec<u8>> {
        let len = curve.order_len();
        let mut out = fixed_bytes(&self.r, len)?;
        out.extend_from_slice(&fixed_bytes(&self.s, len)?);
        Ok(out)
    }

    /// Parse `r || s`
    pub fn from_bytes(curve: &PrimeFieldCurve, bytes: &[u8]) -> Result<Self> {
        let len = curve.order_len();
        if bytes.len() != 2 * len {
            return Err(Error::InvalidSignatureSize {
                expected: 2 * len,
                actual: bytes.len(),
            });
        }
        let (r, s) = bytes.split_at(len);
        Ok(Signature {
            r: BigUint::from_bytes_be(r),
            s: BigUint::from_bytes_be(s),
        })
    }

    /// Serialize to DER: `SEQUENCE { INTEGER r, INTEGER s }`
    pub fn to_der(&self) -> Vec<u8> {
        let mut body = Vec::new();
        encode_integer(&mut body, &self.r);
        encode_integer(&mut body, &self.s);

        let mut der = Vec::with_capacity(body.len() + 4);
        der.push(DER_SEQUENCE);
        encode_length(&mut der, body.len());
        der.extend_from_slice(&body);
        der
    }

    /// Parse strict DER
    ///
    /// Rejects non-minimal lengths, non-minimal or negative integers and
    /// trailing data.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let mut reader = DerReader { input: der };
        let body = reader.read_tlv(DER_SEQUENCE)?;
        if !reader.input.is_empty() {
            return Err(Error::Encoding("trailing data after SEQUENCE".into()));
        }

        let mut inner = DerReader { input: body };
        let r = decode_integer(inner.read_tlv(DER_INTEGER)?)?;
        let s = decode_integer(inner.read_tlv(DER_INTEGER)?)?;
        if !inner.input.is_empty() {
            return Err(Error::Encoding("trailing data inside SEQUENCE".into()));
        }
        Ok(Signature { r, s })
    }
}

/// Encode integer for DER (add leading zero if high bit set)
fn encode_integer(out: &mut Vec<u8>, value: &BigUint) {
    let bytes = value.to_bytes_be();
    let pad = bytes[0] & 0x80 != 0;
    out.push(DER_INTEGER);
    encode_length(out, bytes.len() + pad as usize);
    if pad {
        out.push(0x00);
    }
    out.extend_from_slice(&bytes);
}

fn encode_length(out: &mut Vec<u8>, len: usize) {
    if len < 0x80 {
        out.push(len as u8);
        return;
    }
    let bytes = len.to_be_bytes();
    let skip = bytes.iter().take_while(|&&b| b == 0).count();
    out.push(0x80 | (bytes.len() - skip) as u8);
    out.extend_from_slice(&bytes[skip..]);
}

fn decode_integer(content: &[u8]) -> Result<BigUint> {
    match content {
        [] => Err(Error::Encoding("empty INTEGER".into())),
        [first, ..] if first & 0x80 != 0 => Err(Error::Encoding("negative INTEGER".into())),
        [0x00, second, ..] if second & 0x80 == 0 => {
            Err(Error::Encoding("non-minimal INTEGER".into()))
        }
        _ => Ok(BigUint::from_bytes_be(content)),
    }
}

struct DerReader<'a> {
    input: &'a [u8],
}

impl<'a> DerReader<'a> {
    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.input.len() < n {
            return Err(Error::Encoding("truncated DER".into()));
        }
        let (head, tail) = self.input.split_at(n);
        self.input = tail;
        Ok(head)
    }

    fn read_length(&mut self) -> Result<usize> {
        let first = self.take(1)?[0];
        if first < 0x80 {
            return Ok(first as usize);
        }
        let count = (first & 0x7F) as usize;
        if count == 0 || count > core::mem::size_of::<usize>() {
            return Err(Error::Encoding("unsupported length form".into()));
        }
        let bytes = self.take(count)?;
        if bytes[0] == 0 {
            return Err(Error::Encoding("non-minimal length".into()));
        }
        let len = bytes.iter().fold(0usize, |acc, &b| (acc << 8) | b as usize);
        if len < 0x80 {
            return Err(Error::Encoding("non-minimal length".into()));
        }
        Ok(len)
    }

    fn read_tlv(&mut self, tag: u8) -> Result<&'a [u8]> {
        if self.take(1)?[0] != tag {
            return Err(Error::Encoding(format!("expected tag 0x{:02x}", tag)));
        }
        let len = self.read_length()?;
        self.take(len)
    }
}
