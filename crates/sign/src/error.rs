//! Error types for the signature crate

use alloc::format;
use alloc::string::String;
use core::fmt;

use gmcrypt_algorithms::error::Error as AlgoError;

/// Errors that can occur during signature operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Failure inside a primitive (curve arithmetic, hashing, randomness)
    Primitive(AlgoError),

    /// The private key cannot sign
    InvalidKey(String),

    /// Invalid parameter
    InvalidParameter(String),

    /// Invalid signature size
    InvalidSignatureSize { expected: usize, actual: usize },

    /// Malformed DER encoding
    Encoding(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(err) => write!(f, "Primitive error: {}", err),
            Error::InvalidKey(msg) => write!(f, "Invalid key: {}", msg),
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::InvalidSignatureSize { expected, actual } => {
                write!(
                    f,
                    "Invalid signature size: expected {}, got {}",
                    expected, actual
                )
            }
            Error::Encoding(msg) => write!(f, "Encoding error: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<AlgoError> for Error {
    fn from(err: AlgoError) -> Self {
        Error::Primitive(err)
    }
}

// Convert to api::Error
impl From<Error> for gmcrypt_api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(inner) => inner.into(),
            Error::InvalidKey(msg) => gmcrypt_api::Error::InvalidKey {
                context: "SM2 signature",
                message: msg,
            },
            Error::InvalidParameter(msg) => gmcrypt_api::Error::InvalidParameter {
                context: "SM2 signature",
                message: msg,
            },
            Error::InvalidSignatureSize { expected, actual } => {
                gmcrypt_api::Error::InvalidSignature {
                    context: "SM2 signature",
                    message: format!(
                        "Invalid signature size: expected {}, got {}",
                        expected, actual
                    ),
                }
            }
            Error::Encoding(msg) => gmcrypt_api::Error::SerializationError {
                context: "SM2 signature DER",
                message: msg,
            },
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
