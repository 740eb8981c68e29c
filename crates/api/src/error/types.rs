//! Error type definitions for cryptographic operations

use alloc::string::String;

use thiserror::Error;

/// Primary error type for cryptographic operations
///
/// Every algorithm crate converts its own error into this type at the API
/// boundary. `context` names the operation that failed; `message` carries
/// non-secret detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Curve parameters are singular or too small
    #[error("Invalid domain parameters: {context}: {message}")]
    InvalidDomainParameters {
        context: &'static str,
        message: String,
    },

    /// A finite point does not satisfy the curve equation
    #[error("Point not on curve: {context}")]
    PointNotOnCurve { context: &'static str },

    /// A point is not annihilated by the curve order
    #[error("Point outside the prime-order subgroup: {context}")]
    InvalidSubgroup { context: &'static str },

    /// A key exchange could not complete
    #[error("Key agreement failed: {context}: {message}")]
    KeyAgreement {
        context: &'static str,
        message: String,
    },

    /// A ciphertext's integrity tag did not match
    #[error("Integrity check failed: {context}")]
    IntegrityCheckFailed { context: &'static str },

    /// Invalid key error
    #[error("Invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid signature error
    #[error("Invalid signature: {context}: {message}")]
    InvalidSignature {
        context: &'static str,
        message: String,
    },

    /// Decryption error
    #[error("Decryption failed: {context}: {message}")]
    DecryptionFailed {
        context: &'static str,
        message: String,
    },

    /// Invalid ciphertext error
    #[error("Invalid ciphertext: {context}: {message}")]
    InvalidCiphertext {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {context}: {message}")]
    SerializationError {
        context: &'static str,
        message: String,
    },

    /// Random generation error
    #[error("Random generation error: {context}: {message}")]
    RandomGenerationError {
        context: &'static str,
        message: String,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its kind and detail
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidDomainParameters { message, .. } => {
                Self::InvalidDomainParameters { context, message }
            }
            Self::PointNotOnCurve { .. } => Self::PointNotOnCurve { context },
            Self::InvalidSubgroup { .. } => Self::InvalidSubgroup { context },
            Self::KeyAgreement { message, .. } => Self::KeyAgreement { context, message },
            Self::IntegrityCheckFailed { .. } => Self::IntegrityCheckFailed { context },
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidSignature { message, .. } => Self::InvalidSignature { context, message },
            Self::DecryptionFailed { message, .. } => Self::DecryptionFailed { context, message },
            Self::InvalidCiphertext { message, .. } => Self::InvalidCiphertext { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::SerializationError { message, .. } => {
                Self::SerializationError { context, message }
            }
            Self::RandomGenerationError { message, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// Replace the message of an existing error
    ///
    /// Variants without a message field are returned unchanged.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidDomainParameters { context, .. } => {
                Self::InvalidDomainParameters { context, message }
            }
            Self::KeyAgreement { context, .. } => Self::KeyAgreement { context, message },
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::InvalidSignature { context, .. } => Self::InvalidSignature { context, message },
            Self::DecryptionFailed { context, .. } => Self::DecryptionFailed { context, message },
            Self::InvalidCiphertext { context, .. } => Self::InvalidCiphertext { context, message },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::SerializationError { context, .. } => {
                Self::SerializationError { context, message }
            }
            Self::RandomGenerationError { context, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { context, .. } => Self::Other { context, message },
            other => other,
        }
    }
}
