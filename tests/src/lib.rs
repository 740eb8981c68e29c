//! Shared fixtures for the gmcrypt cross-crate tests
//!
//! Holds the GM/T 0003 worked-example vectors, a replaying RNG for
//! reproducing them, and an opt-in log subscriber.

pub mod rng;
pub mod vectors;

pub use rng::FixedRng;

use num_bigint::BigUint;
use num_traits::Num;

/// Parse a big-endian hex integer
pub fn hex_int(s: &str) -> BigUint {
    BigUint::from_str_radix(s, 16).expect("valid hex integer")
}

/// Route library logs to the test harness
///
/// Filtered by `RUST_LOG`; safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
