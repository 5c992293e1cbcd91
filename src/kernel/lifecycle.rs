use super::ConfigError;

/// Constructor validation lifecycle shared by kernel structs.
///
/// A kernel is only obtainable through [`try_new`](Self::try_new), so every
/// live kernel value has already had its configuration checked; the run
/// entrypoints only need to validate runtime buffer shapes.
pub trait KernelLifecycle: Sized {
    /// Kernel config type.
    type Config;

    /// Construct a validated kernel from config.
    fn try_new(config: Self::Config) -> Result<Self, ConfigError>;
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, KernelLifecycle};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct ProbeConfig {
        len: usize,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct ProbeKernel {
        len: usize,
    }

    impl KernelLifecycle for ProbeKernel {
        type Config = ProbeConfig;

        fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
            if config.len == 0 {
                return Err(ConfigError::ZeroLength { arg: "len" });
            }
            Ok(Self { len: config.len })
        }
    }

    #[test]
    fn try_new_accepts_valid_config() {
        let kernel = ProbeKernel::try_new(ProbeConfig { len: 8 }).expect("valid config");
        assert_eq!(kernel.len, 8);
    }

    #[test]
    fn try_new_rejects_zero_length() {
        let err = ProbeKernel::try_new(ProbeConfig { len: 0 }).expect_err("zero length");
        assert_eq!(err, ConfigError::ZeroLength { arg: "len" });
    }
}
