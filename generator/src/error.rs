use std::{io, path::PathBuf};

/// Invalid run configuration, detected before anything is generated.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("round count must be an integer, got '{value}'")]
    NotANumber { value: String },
    #[error("round count must be at least 1, got {value}")]
    NonPositive { value: i128 },
    #[error("round count {value} is too large")]
    TooLarge { value: i128 },
}

/// The register list could not be turned into a usable [`crate::RegisterSet`].
#[derive(Debug, thiserror::Error)]
pub enum RegisterSetError {
    #[error("failed to read register list {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("register list {} contains no register names", path.display())]
    Empty { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseImmediateError {
    #[error("empty immediate")]
    Empty,
    #[error("invalid digits in immediate '{0}'")]
    Digits(String),
    #[error("immediate '{0}' is outside the 32-bit signed range")]
    OutOfRange(String),
}
