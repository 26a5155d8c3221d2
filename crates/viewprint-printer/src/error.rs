use thiserror::Error;

/// Result type for viewprint-printer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when parsing printer settings from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown verbosity level: {0}")]
    UnknownLevel(String),

    #[error("unknown color: {0}")]
    UnknownColor(String),

    #[error("unsupported word width: {0} (expected 8, 16 or 32)")]
    UnsupportedWidth(u32),

    #[error("unknown output format: {0}")]
    UnknownFormat(String),
}
