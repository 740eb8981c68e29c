//! SM2 key material shared by the signature, encryption and key exchange engines

mod identity;
mod keys;

pub use identity::identity_hash;
pub use keys::{BoundIdentity, IdentifiedPublicKey, KeyPair, PrivateKey};
