//! Crate-level error surface for the free-function API.
//!
//! Kernels report [`crate::kernel::ConfigError`] and
//! [`crate::kernel::ExecError`]; the free functions the scene evaluator
//! calls fold both into this single [`Error`] type.

use core::{error, fmt};

use crate::kernel::{ConfigError, ExecError};

/// Convenience alias for results produced by the free-function API.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised whilst evaluating scadnum functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument passed into a function was invalid.
    #[cfg(feature = "alloc")]
    InvalidArg {
        /// The invalid argument.
        arg: alloc::string::String,
        /// Why the argument is invalid.
        reason: alloc::string::String,
    },
    /// An argument passed into a function was invalid.
    #[cfg(not(feature = "alloc"))]
    InvalidArg,
    /// Two operand sequences that must agree in length did not.
    #[cfg(feature = "alloc")]
    LengthMismatch {
        /// The offending argument.
        arg: alloc::string::String,
        /// Required length.
        expected: usize,
        /// Received length.
        got: usize,
    },
    /// Two operand sequences that must agree in length did not.
    #[cfg(not(feature = "alloc"))]
    LengthMismatch,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "alloc")]
            Error::InvalidArg { arg, reason } => {
                write!(f, "invalid argument `{arg}`: {reason}")
            }
            #[cfg(not(feature = "alloc"))]
            Error::InvalidArg => write!(f, "invalid argument"),
            #[cfg(feature = "alloc")]
            Error::LengthMismatch { arg, expected, got } => {
                write!(f, "length mismatch on `{arg}`: expected {expected}, got {got}")
            }
            #[cfg(not(feature = "alloc"))]
            Error::LengthMismatch => write!(f, "length mismatch"),
        }
    }
}

impl error::Error for Error {}

impl From<ConfigError> for Error {
    #[cfg(feature = "alloc")]
    fn from(value: ConfigError) -> Self {
        use alloc::string::ToString;
        match value {
            ConfigError::ZeroLength { arg } => Error::InvalidArg {
                arg: arg.into(),
                reason: "sequence length must be at least 1".into(),
            },
            ConfigError::InvalidArgument { arg, reason } => Error::InvalidArg {
                arg: arg.into(),
                reason: reason.into(),
            },
            ConfigError::NonContiguous { arg } => Error::InvalidArg {
                arg: arg.into(),
                reason: "buffer is not contiguous".to_string(),
            },
            ConfigError::LengthMismatch { arg, expected, got } => Error::LengthMismatch {
                arg: arg.into(),
                expected,
                got,
            },
        }
    }

    #[cfg(not(feature = "alloc"))]
    fn from(value: ConfigError) -> Self {
        match value {
            ConfigError::LengthMismatch { .. } => Error::LengthMismatch,
            _ => Error::InvalidArg,
        }
    }
}

impl From<ExecError> for Error {
    #[cfg(feature = "alloc")]
    fn from(value: ExecError) -> Self {
        match value {
            ExecError::LengthMismatch { arg, expected, got } => Error::LengthMismatch {
                arg: arg.into(),
                expected,
                got,
            },
            ExecError::EmptyInput { arg } => Error::InvalidArg {
                arg: arg.into(),
                reason: "input must carry at least one sample".into(),
            },
            ExecError::Config(err) => err.into(),
        }
    }

    #[cfg(not(feature = "alloc"))]
    fn from(value: ExecError) -> Self {
        match value {
            ExecError::LengthMismatch { .. } => Error::LengthMismatch,
            _ => Error::InvalidArg,
        }
    }
}
