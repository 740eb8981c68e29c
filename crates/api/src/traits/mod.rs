//! Traits implemented by the gmcrypt engines
//!
//! Every engine is an instance bound to a curve, so the methods take `&self`
//! instead of being associated functions.

pub mod agreement;
pub mod pke;
pub mod signature;

pub use agreement::KeyAgreement;
pub use pke::Pke;
pub use signature::Signature;
