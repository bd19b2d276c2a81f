//! Input boundary: observation-text parsing and chart request validation.
//!
//! A chart request arrives as three loosely-typed fields (sample size,
//! defect rate, and a comma-separated list of defective counts), any of
//! which may be absent. [`ChartRequest::evaluate`] checks presence, parses,
//! validates the domain, and only then computes the chart.
//!
//! # Request file format
//!
//! ```toml
//! sample_size = 100
//! defect_rate = 0.05
//! defectives = "5, 7, 3, 6, 4, 10, 5, 4, 6"
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{NpChartError, Result};
use crate::spc::{ChartParameters, NPChart};

/// Parse a comma-separated list of defective counts.
///
/// Tokens are trimmed; empty tokens (blank entries, trailing commas) are
/// skipped. Every remaining token must be a base-10 integer, optionally
/// signed, with single `_` separators allowed between digits (`1_000`).
///
/// # Errors
///
/// Returns [`NpChartError::Parse`] for the first token that is not an
/// integer. `position` counts all comma-separated tokens, empty ones included.
///
/// # Examples
///
/// ```
/// use np_chart::input::parse_observations;
///
/// assert_eq!(parse_observations("3, 5,,4,").unwrap(), vec![3, 5, 4]);
/// assert!(parse_observations("3, abc").is_err());
/// ```
pub fn parse_observations(text: &str) -> Result<Vec<i64>> {
    text.split(',')
        .enumerate()
        .map(|(i, raw)| (i + 1, raw.trim()))
        .filter(|(_, token)| !token.is_empty())
        .map(|(position, token)| {
            parse_count(token).ok_or_else(|| NpChartError::Parse {
                position,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Parse one signed integer token, accepting `_` between digits.
fn parse_count(token: &str) -> Option<i64> {
    let digits = token
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(token);
    if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return None;
    }
    token.replace('_', "").parse().ok()
}

/// A raw, possibly incomplete np chart request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartRequest {
    /// Constant sample size `n`.
    pub sample_size: Option<u64>,
    /// Historical defect rate `p`.
    pub defect_rate: Option<f64>,
    /// Comma-separated defective counts, one per sample.
    pub defectives: Option<String>,
}

impl ChartRequest {
    /// Decode a request from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read and decode a request from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| NpChartError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded chart request");
        Self::from_toml_str(&text)
    }

    /// Check that every field is present and the parameters lie in their domain.
    ///
    /// Returns the validated parameters together with the (non-blank)
    /// defectives text.
    ///
    /// # Errors
    ///
    /// [`NpChartError::MissingInput`] for the first absent field (the
    /// defectives text counts as absent when blank), then
    /// [`NpChartError::DomainViolation`] for out-of-range values.
    pub fn parameters(&self) -> Result<(ChartParameters, &str)> {
        let sample_size = self.sample_size.ok_or(NpChartError::MissingInput {
            field: "sample_size",
        })?;
        let defect_rate = self.defect_rate.ok_or(NpChartError::MissingInput {
            field: "defect_rate",
        })?;
        let defectives = self
            .defectives
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .ok_or(NpChartError::MissingInput {
                field: "defectives",
            })?;

        let parameters = ChartParameters::new(sample_size, defect_rate)?;
        Ok((parameters, defectives))
    }

    /// Validate, parse, and compute the chart.
    pub fn evaluate(&self) -> Result<NPChart> {
        let (parameters, defectives) = self.parameters()?;
        let observations = parse_observations(defectives)?;
        Ok(NPChart::compute(&parameters, &observations))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn parse_formatted_counts(
            values in proptest::collection::vec(0_i64..100_000, 0..=30)
        ) {
            let text = values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" , ");
            let parsed = parse_observations(&text).expect("integers only");
            prop_assert_eq!(parsed, values);
        }
    }
}
