use core::fmt;

/// Validation errors raised while constructing a kernel or binding a buffer
/// adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A sequence-length argument was zero where at least one sample is
    /// required (e.g. the transform length `N`).
    ZeroLength {
        /// Name of the length argument.
        arg: &'static str,
    },
    /// A configuration argument value is invalid.
    InvalidArgument {
        /// Name of the argument.
        arg: &'static str,
        /// Human readable reason.
        reason: &'static str,
    },
    /// A contiguous 1D view could not be obtained from a buffer adapter.
    NonContiguous {
        /// Name of the argument that is non-contiguous.
        arg: &'static str,
    },
    /// Paired constructor inputs did not agree in length.
    LengthMismatch {
        /// Name of the argument.
        arg: &'static str,
        /// Required length.
        expected: usize,
        /// Received length.
        got: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroLength { arg } => {
                write!(f, "sequence length `{arg}` must be at least 1")
            }
            ConfigError::InvalidArgument { arg, reason } => {
                write!(f, "invalid argument `{arg}`: {reason}")
            }
            ConfigError::NonContiguous { arg } => {
                write!(f, "argument `{arg}` is not contiguous in memory")
            }
            ConfigError::LengthMismatch { arg, expected, got } => {
                write!(f, "length mismatch on `{arg}`: expected {expected}, got {got}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Runtime shape/precondition violations raised by checked kernel
/// entrypoints (`run_into` / `run_alloc`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecError {
    /// An input or output buffer length mismatched the expected shape.
    LengthMismatch {
        /// Name of the argument.
        arg: &'static str,
        /// Required length.
        expected: usize,
        /// Received length.
        got: usize,
    },
    /// An input that must carry at least one sample was empty.
    EmptyInput {
        /// Name of the argument.
        arg: &'static str,
    },
    /// Adapter binding failure while borrowing a buffer.
    Config(ConfigError),
}

impl From<ConfigError> for ExecError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl fmt::Display for ExecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecError::LengthMismatch { arg, expected, got } => {
                write!(f, "length mismatch on `{arg}`: expected {expected}, got {got}")
            }
            ExecError::EmptyInput { arg } => write!(f, "input `{arg}` was empty"),
            ExecError::Config(err) => write!(f, "{err}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ExecError {}
