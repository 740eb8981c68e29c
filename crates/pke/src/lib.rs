//! SM2 public key encryption (GB/T 32918.4)
//!
//! Ciphertexts are laid out as `C1 || C2 || C3`: the ephemeral point
//! `[k]G`, the message masked with an SM3-KDF keystream, and the integrity
//! tag `SM3(x2 || M || y2)`.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod sm2;

// Re-export key items
pub use error::{Error, Result};
pub use sm2::{Sm2Ciphertext, Sm2Encryptor};
