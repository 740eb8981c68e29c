//! SM3 cryptographic hash algorithm (GB/T 32905-2016)
//!
//! A Merkle-Damgard hash over 512-bit blocks with a 256-bit chaining value.
//! Each block is expanded from 16 to 68 words and mixed over 64 rounds; the
//! result is XORed into the chaining value.

use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::hash::{Hash, HashAlgorithm, HashFunction};
use crate::types::Digest;
use byteorder::{BigEndian, ByteOrder};
use core::sync::atomic::{compiler_fence, Ordering};
use zeroize::Zeroize;

use gmcrypt_common::security::{EphemeralSecret, SecureZeroingType, ZeroizeGuard};
use gmcrypt_params::utils::hash::{
    SM3_BLOCK_SIZE, SM3_EXPANDED_WORDS, SM3_IV, SM3_OUTPUT_SIZE, SM3_T_EARLY, SM3_T_LATE,
};

/// `T_j <<< (j mod 32)` for every round
const ROUND_CONSTANTS: [u32; 64] = {
    let mut table = [0u32; 64];
    let mut j = 0;
    while j < 64 {
        let t = if j < 16 { SM3_T_EARLY } else { SM3_T_LATE };
        table[j] = t.rotate_left((j % 32) as u32);
        j += 1;
    }
    table
};

/// Marker type for the SM3 algorithm
pub enum Sm3Algorithm {}

impl HashAlgorithm for Sm3Algorithm {
    const OUTPUT_SIZE: usize = SM3_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SM3_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SM3";
}

/// SM3 hash state
///
/// Not thread-safe by design: each computation should own its instance.
#[derive(Clone, Zeroize)]
pub struct Sm3 {
    state: [u32; 8],
    buffer: [u8; SM3_BLOCK_SIZE],
    buffer_idx: usize,
    total_bytes: u64,
}

impl Drop for Sm3 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Default for Sm3 {
    fn default() -> Self {
        Self::new()
    }
}

#[inline(always)]
fn p0(x: u32) -> u32 {
    x ^ x.rotate_left(9) ^ x.rotate_left(17)
}

#[inline(always)]
fn p1(x: u32) -> u32 {
    x ^ x.rotate_left(15) ^ x.rotate_left(23)
}

#[inline(always)]
fn ff(j: usize, x: u32, y: u32, z: u32) -> u32 {
    if j < 16 {
        x ^ y ^ z
    } else {
        (x & y) | (x & z) | (y & z)
    }
}

#[inline(always)]
fn gg(j: usize, x: u32, y: u32, z: u32) -> u32 {
    if j < 16 {
        x ^ y ^ z
    } else {
        (x & y) | (!x & z)
    }
}

impl Sm3 {
    /// Create a hasher in its initial state
    pub fn new() -> Self {
        Sm3 {
            state: SM3_IV,
            buffer: [0u8; SM3_BLOCK_SIZE],
            buffer_idx: 0,
            total_bytes: 0,
        }
    }

    /// Discard any absorbed input and return to the initial state
    pub fn reset(&mut self) {
        self.zeroize();
        self.state = SM3_IV;
    }

    /// Absorb a single byte
    pub fn update_byte(&mut self, byte: u8) -> Result<&mut Self> {
        self.update_internal(&[byte])?;
        Ok(self)
    }

    fn compress(state: &mut [u32; 8], block: &[u8; SM3_BLOCK_SIZE]) {
        let mut w = EphemeralSecret::new([0u32; SM3_EXPANDED_WORDS]);
        let mut w_prime = EphemeralSecret::new([0u32; 64]);

        compiler_fence(Ordering::SeqCst);

        for (i, chunk) in block.chunks_exact(4).enumerate() {
            w[i] = BigEndian::read_u32(chunk);
        }
        for j in 16..SM3_EXPANDED_WORDS {
            w[j] = p1(w[j - 16] ^ w[j - 9] ^ w[j - 3].rotate_left(15))
                ^ w[j - 13].rotate_left(7)
                ^ w[j - 6];
        }
        for j in 0..64 {
            w_prime[j] = w[j] ^ w[j + 4];
        }

        let mut working_vars = *state;
        let mut guard = ZeroizeGuard::new(&mut working_vars);
        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *guard;

        for j in 0..64 {
            let a12 = a.rotate_left(12);
            let ss1 = a12
                .wrapping_add(e)
                .wrapping_add(ROUND_CONSTANTS[j])
                .rotate_left(7);
            let ss2 = ss1 ^ a12;
            let tt1 = ff(j, a, b, c)
                .wrapping_add(d)
                .wrapping_add(ss2)
                .wrapping_add(w_prime[j]);
            let tt2 = gg(j, e, f, g)
                .wrapping_add(h)
                .wrapping_add(ss1)
                .wrapping_add(w[j]);

            d = c;
            c = b.rotate_left(9);
            b = a;
            a = tt1;
            h = g;
            g = f.rotate_left(19);
            f = e;
            e = p0(tt2);
        }

        *guard = [a, b, c, d, e, f, g, h];
        for (s, v) in state.iter_mut().zip(guard.iter()) {
            *s ^= *v;
        }

        compiler_fence(Ordering::SeqCst);
    }

    fn update_internal(&mut self, mut input: &[u8]) -> Result<()> {
        self.total_bytes = self
            .total_bytes
            .checked_add(input.len() as u64)
            .filter(|total| *total <= u64::MAX / 8)
            .ok_or(Error::Processing {
                operation: "SM3 update",
                details: "message length exceeds 2^64 bits",
            })?;

        while !input.is_empty() {
            let fill = core::cmp::min(input.len(), SM3_BLOCK_SIZE - self.buffer_idx);
            self.buffer[self.buffer_idx..self.buffer_idx + fill].copy_from_slice(&input[..fill]);
            self.buffer_idx += fill;
            input = &input[fill..];
            if self.buffer_idx == SM3_BLOCK_SIZE {
                let block = self.buffer;
                Self::compress(&mut self.state, &block);
                self.buffer_idx = 0;
            }
        }
        Ok(())
    }

    fn finalize_internal(&mut self) -> Hash {
        let bit_len = self.total_bytes * 8;

        self.buffer[self.buffer_idx] = 0x80;
        if self.buffer_idx >= SM3_BLOCK_SIZE - 8 {
            for b in &mut self.buffer[self.buffer_idx + 1..] {
                *b = 0;
            }
            let block = self.buffer;
            Self::compress(&mut self.state, &block);
            self.buffer = [0u8; SM3_BLOCK_SIZE];
        } else {
            for b in &mut self.buffer[self.buffer_idx + 1..SM3_BLOCK_SIZE - 8] {
                *b = 0;
            }
        }

        BigEndian::write_u64(&mut self.buffer[SM3_BLOCK_SIZE - 8..], bit_len);
        let block = self.buffer;
        Self::compress(&mut self.state, &block);

        let mut out = Vec::with_capacity(SM3_OUTPUT_SIZE);
        for &word in &self.state {
            out.extend_from_slice(&word.to_be_bytes());
        }
        self.reset();
        out
    }
}

impl SecureZeroingType for Sm3 {
    fn zeroed() -> Self {
        Self::new()
    }
}

impl HashFunction for Sm3 {
    type Algorithm = Sm3Algorithm;
    type Output = Digest<SM3_OUTPUT_SIZE>;

    fn new() -> Self {
        Sm3::new()
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.update_internal(data)?;
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        let hash = self.finalize_internal();
        Digest::from_slice(&hash)
    }
}
