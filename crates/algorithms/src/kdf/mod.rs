//! Counter-mode key derivation over a hash function
//!
//! Produces `output_len` bytes as
//! `H(Z || 0x00000001) || H(Z || 0x00000002) || ...`, truncating the final
//! block, where `Z` is the concatenation of the inputs. This is the KDF used
//! by SM2 for both the encryption keystream and the key-agreement secret.

use alloc::vec::Vec;
use core::marker::PhantomData;

use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::hash::{HashFunction, Sm3};

/// Counter-mode KDF parameterized by its hash
#[derive(Clone)]
pub struct Kdf<H: HashFunction = Sm3> {
    _hash: PhantomData<H>,
}

impl<H: HashFunction> Default for Kdf<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: HashFunction> Kdf<H> {
    /// Create a KDF instance
    pub fn new() -> Self {
        Kdf { _hash: PhantomData }
    }

    /// Derive `output_len` bytes from the concatenation of `inputs`
    ///
    /// An `output_len` of zero yields an empty buffer. Lengths beyond the
    /// 32-bit counter range, or that cannot be allocated, are rejected
    /// rather than aborting.
    pub fn derive(&self, output_len: usize, inputs: &[&[u8]]) -> Result<Zeroizing<Vec<u8>>> {
        let block = H::output_size();
        let blocks = output_len.div_ceil(block);
        if blocks as u64 > u32::MAX as u64 {
            return Err(Error::param("output_len", "exceeds the 32-bit counter range"));
        }

        let capacity = blocks
            .checked_mul(block)
            .ok_or(Error::param("output_len", "exceeds the addressable size"))?;
        let mut out = Zeroizing::new(Vec::<u8>::new());
        // must not reallocate once key material is written
        out.try_reserve_exact(capacity).map_err(|_| Error::Processing {
            operation: "kdf",
            details: "cannot allocate the output buffer",
        })?;
        let mut hasher = H::new();
        let mut counter = [0u8; 4];
        for ct in 1..=blocks as u32 {
            for input in inputs {
                hasher.update(input)?;
            }
            BigEndian::write_u32(&mut counter, ct);
            hasher.update(&counter)?;
            let digest = hasher.finalize()?;
            out.extend_from_slice(digest.as_ref());
        }
        out.truncate(output_len);
        Ok(out)
    }
}

/// SM3-based KDF over the concatenation of `inputs`
pub fn kdf(output_len: usize, inputs: &[&[u8]]) -> Result<Zeroizing<Vec<u8>>> {
    Kdf::<Sm3>::new().derive(output_len, inputs)
}
