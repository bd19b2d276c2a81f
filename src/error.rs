//! Error types for np-chart.
//!
//! Every failure the calculator or its input boundary can report is a
//! variant of [`NpChartError`]. Computation never yields partial results:
//! a call either returns a complete chart or one of these errors.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for np-chart operations.
pub type Result<T> = std::result::Result<T, NpChartError>;

/// Errors that can occur when building an np chart.
#[derive(Error, Debug)]
pub enum NpChartError {
    /// A required input (sample size, defect rate, or defectives) is absent.
    #[error("missing required input: {field}")]
    MissingInput {
        /// Name of the absent field.
        field: &'static str,
    },

    /// An observation token is not a valid integer.
    #[error("invalid defective count {token:?} at position {position}: expected an integer")]
    Parse {
        /// 1-based position of the token in the comma-separated list.
        position: usize,
        /// The offending token, trimmed.
        token: String,
    },

    /// Sample size or defect rate lies outside its valid domain.
    #[error("domain violation: {0}")]
    DomainViolation(String),

    /// Reading a request file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A request document could not be decoded.
    #[error("invalid chart request: {0}")]
    Request(#[from] toml::de::Error),
}
