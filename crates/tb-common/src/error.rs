//! Error types for TransBench records.

use thiserror::Error;

/// Result type alias for TransBench record operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while interpreting categorical record values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A categorical field held a value outside its closed set.
    #[error("unknown {dimension} value: '{value}'")]
    UnknownValue {
        dimension: &'static str,
        value: String,
    },
}

impl Error {
    /// Build an [`Error::UnknownValue`] for `dimension`.
    pub fn unknown(dimension: &'static str, value: impl Into<String>) -> Self {
        Error::UnknownValue {
            dimension,
            value: value.into(),
        }
    }
}
