//! Security primitives and memory safety utilities
//!
//! Sensitive values (private scalars, shared secrets, hash schedules) are held
//! in these wrappers so they are wiped when they go out of scope.

pub mod secret;

pub use secret::{EphemeralSecret, SecretVec, SecureZeroingType, ZeroizeGuard};
