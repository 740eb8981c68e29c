//! Cryptographic hash functions
//!
//! The `HashFunction` trait is the seam the KDF and the SM2 engines are
//! written against; SM3 is the only implementation shipped.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::Result;

pub mod sm3;

pub use sm3::Sm3;

/// Raw hash output before it is wrapped in a sized digest
pub type Hash = Vec<u8>;

/// Compile-time description of a hash algorithm
pub trait HashAlgorithm {
    /// Output size in bytes
    const OUTPUT_SIZE: usize;
    /// Internal block size in bytes
    const BLOCK_SIZE: usize;
    /// Algorithm name
    const ALGORITHM_ID: &'static str;
}

/// Incremental hash function
///
/// `finalize` returns the digest and leaves the instance in its initial
/// state, so one instance can hash several messages in sequence.
pub trait HashFunction: Clone {
    /// Algorithm marker
    type Algorithm: HashAlgorithm;

    /// Digest type produced by `finalize`
    type Output: AsRef<[u8]> + Clone;

    /// Create a fresh instance
    fn new() -> Self;

    /// Absorb more input
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Produce the digest and reset
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Output size in bytes
    fn output_size() -> usize {
        Self::Algorithm::OUTPUT_SIZE
    }

    /// Block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Algorithm name
    fn name() -> String {
        Self::Algorithm::ALGORITHM_ID.to_string()
    }

    /// One-shot convenience
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }
}
