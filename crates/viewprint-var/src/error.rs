use thiserror::Error;

/// Result type for viewprint-var operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by capability and bounds checked view operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("view is read-only")]
    ReadOnly,

    #[error("position {position} is out of bounds for {count} element(s)")]
    OutOfBounds { position: usize, count: usize },

    #[error("range {offset}..{end} is outside a view of {size} byte(s)")]
    InvalidRange {
        offset: usize,
        end: usize,
        size: usize,
    },

    #[error("invalid hex string: {0}")]
    InvalidHex(String),
}
