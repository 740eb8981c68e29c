//! Error handling for cryptographic primitives

use alloc::borrow::Cow;
use alloc::string::ToString;
use core::fmt;

use gmcrypt_api::{Error as CoreError, Result as CoreResult};

/// The error type for cryptographic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Curve parameters fail the discriminant or size check
    InvalidDomainParameters {
        /// Which check failed
        reason: &'static str,
    },

    /// A finite point does not satisfy the curve equation
    PointNotOnCurve {
        /// Operation that rejected the point
        context: &'static str,
    },

    /// `[n]P` is not the point at infinity
    InvalidSubgroup {
        /// Operation that rejected the point
        context: &'static str,
    },

    /// Processing error during cryptographic operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },

    /// The random source failed to produce bytes
    RandomGeneration {
        /// Operation that requested randomness
        context: &'static str,
    },

    /// Fallback for other errors
    Other(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type for hash operations
pub type HashResult<T> = Result<T>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::InvalidDomainParameters { reason } => {
                write!(f, "Invalid domain parameters: {}", reason)
            }
            Error::PointNotOnCurve { context } => {
                write!(f, "Point not on curve in {}", context)
            }
            Error::InvalidSubgroup { context } => {
                write!(f, "Point outside the prime-order subgroup in {}", context)
            }
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
            Error::RandomGeneration { context } => {
                write!(f, "Random source failure in {}", context)
            }
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl core::error::Error for Error {}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: match name {
                    Cow::Borrowed(s) => s,
                    Cow::Owned(_) => "parameter",
                },
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::InvalidDomainParameters { reason } => CoreError::InvalidDomainParameters {
                context: "curve construction",
                message: reason.to_string(),
            },
            Error::PointNotOnCurve { context } => CoreError::PointNotOnCurve { context },
            Error::InvalidSubgroup { context } => CoreError::InvalidSubgroup { context },
            Error::Processing { operation, details } => CoreError::Other {
                context: operation,
                message: details.to_string(),
            },
            Error::RandomGeneration { context } => CoreError::RandomGenerationError {
                context,
                message: "random source failure".to_string(),
            },
            Error::Other(msg) => CoreError::Other {
                context: "primitives",
                message: msg.to_string(),
            },
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Re-export core error handling traits for convenience
pub use gmcrypt_api::error::ResultExt;

// Include the validation submodule
pub mod validate;
