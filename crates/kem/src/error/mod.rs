//! Error handling for key exchange operations

use alloc::format;
use alloc::string::ToString;
use core::fmt;

use gmcrypt_algorithms::error::Error as PrimitiveError;
use gmcrypt_api::error::Error as CoreError;

/// Error type for key exchange operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Primitive error
    Primitive(PrimitiveError),

    /// The exchange cannot complete; fatal to this exchange
    KeyAgreement { reason: &'static str },

    /// Invalid key material
    InvalidKey {
        key_type: &'static str,
        reason: &'static str,
    },

    /// A session method was called out of order
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },
}

/// Result type for key exchange operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// A peer point failed validation
    pub const CURVE_MISMATCH: Error = Error::KeyAgreement {
        reason: "curve mismatch",
    };
    /// The shared point is the point at infinity
    pub const POINT_AT_INFINITY: Error = Error::KeyAgreement {
        reason: "point at infinity",
    };
    /// The peer's confirmation tag is wrong
    pub const TAG_MISMATCH: Error = Error::KeyAgreement {
        reason: "tag mismatch",
    };
    /// The parties asked for different key lengths
    pub const KEY_LENGTH_MISMATCH: Error = Error::KeyAgreement {
        reason: "key length mismatch",
    };
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::KeyAgreement { reason } => write!(f, "Key agreement failed: {}", reason),
            Error::InvalidKey { key_type, reason } => {
                write!(f, "Invalid {} key: {}", key_type, reason)
            }
            Error::InvalidState { operation, state } => {
                write!(f, "Cannot {} in state {}", operation, state)
            }
        }
    }
}

// Standard error trait
#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

// From PrimitiveError to Error
impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

// From Error to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::KeyAgreement { reason } => CoreError::KeyAgreement {
                context: "SM2 key exchange",
                message: reason.to_string(),
            },
            Error::InvalidKey { key_type, reason } => CoreError::InvalidKey {
                context: key_type,
                message: reason.to_string(),
            },
            Error::InvalidState { operation, state } => CoreError::InvalidParameter {
                context: operation,
                message: format!("not allowed in state {}", state),
            },
        }
    }
}

// Include validation submodule
pub mod validate;
