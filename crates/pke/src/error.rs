//! Error handling for PKE operations.

use alloc::string::ToString;

use gmcrypt_algorithms::error::Error as PrimitiveError;
use gmcrypt_api::error::Error as CoreError;

/// Error type for PKE operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Failure inside a primitive (point decoding, KDF, randomness)
    #[error("PKE primitive error: {0}")]
    Primitive(#[from] PrimitiveError),

    /// The ciphertext does not split into C1, C2 and C3
    #[error("Invalid SM2 ciphertext format: {0}")]
    InvalidCiphertextFormat(&'static str),

    /// The recipient's public key cannot be encrypted to
    #[error("Invalid SM2 public key: {0}")]
    InvalidPublicKey(&'static str),

    /// Invalid caller input
    #[error("Invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// Decryption could not proceed
    #[error("SM2 decryption failed: {0}")]
    DecryptionFailed(&'static str),

    /// `C3` does not match the recovered plaintext
    #[error("SM2 ciphertext integrity check failed")]
    IntegrityCheckFailed,
}

// Conversion from PKE Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::InvalidCiphertextFormat(reason) => CoreError::InvalidCiphertext {
                context: "SM2 decryption",
                message: reason.to_string(),
            },
            Error::InvalidPublicKey(reason) => CoreError::InvalidKey {
                context: "SM2 encryption",
                message: reason.to_string(),
            },
            Error::InvalidParameter(reason) => CoreError::InvalidParameter {
                context: "SM2 encryption",
                message: reason.to_string(),
            },
            Error::DecryptionFailed(reason) => CoreError::DecryptionFailed {
                context: "SM2 decryption",
                message: reason.to_string(),
            },
            Error::IntegrityCheckFailed => CoreError::IntegrityCheckFailed {
                context: "SM2 decryption",
            },
        }
    }
}

/// Result type for PKE operations.
pub type Result<T> = core::result::Result<T, Error>;
