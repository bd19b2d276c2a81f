//! Attributes control chart for a count of nonconforming items: the NP chart.
//!
//! Unlike variables charts, attributes charts use the binomial distribution
//! to compute control limits. The NP chart takes the historical defect rate
//! `p` as a given input rather than estimating it from the observed counts,
//! so its limits depend only on `(n, p)`.
//!
//! # Formulas
//!
//! - CL = n * p
//! - sigma = sqrt(n * p * (1 - p))
//! - UCL = CL + 3 * sigma
//! - LCL = max(0, CL - 3 * sigma)
//!
//! # References
//!
//! - Montgomery, D.C. (2019). *Introduction to Statistical Quality Control*, 8th ed.,
//!   Chapter 7: Control Charts for Attributes.
//! - ASTM E2587 — Standard Practice for Use of Control Charts

use tracing::debug;

use super::chart::{ClassifiedSample, ControlLimits};
use crate::error::{NpChartError, Result};

// ---------------------------------------------------------------------------
// Chart parameters
// ---------------------------------------------------------------------------

/// Validated inputs of an NP chart.
///
/// # Invariants
///
/// - `sample_size >= 1`
/// - `0 <= defect_rate <= 1`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartParameters {
    sample_size: u64,
    defect_rate: f64,
}

impl ChartParameters {
    /// Create chart parameters from a sample size `n` and a defect rate `p`.
    ///
    /// # Errors
    ///
    /// Returns [`NpChartError::DomainViolation`] if `sample_size == 0` or
    /// `defect_rate` is not a finite value in `[0, 1]`.
    pub fn new(sample_size: u64, defect_rate: f64) -> Result<Self> {
        if sample_size == 0 {
            return Err(NpChartError::DomainViolation(
                "sample size must be at least 1".to_string(),
            ));
        }
        if !defect_rate.is_finite() || !(0.0..=1.0).contains(&defect_rate) {
            return Err(NpChartError::DomainViolation(format!(
                "defect rate must lie in [0, 1], got {defect_rate}"
            )));
        }
        Ok(Self {
            sample_size,
            defect_rate,
        })
    }

    /// The constant sample size `n`.
    pub fn sample_size(&self) -> u64 {
        self.sample_size
    }

    /// The historical defect rate `p`.
    pub fn defect_rate(&self) -> f64 {
        self.defect_rate
    }

    /// Expected defective count, `n * p`.
    pub fn center_line(&self) -> f64 {
        self.sample_size as f64 * self.defect_rate
    }

    /// Binomial standard deviation, `sqrt(n * p * (1 - p))`.
    pub fn sigma(&self) -> f64 {
        let n = self.sample_size as f64;
        let p = self.defect_rate;
        (n * p * (1.0 - p)).sqrt()
    }

    /// The 3-sigma control limits, with the LCL clamped at zero.
    pub fn control_limits(&self) -> ControlLimits {
        let cl = self.center_line();
        let sigma = self.sigma();
        ControlLimits {
            ucl: cl + 3.0 * sigma,
            cl,
            lcl: (cl - 3.0 * sigma).max(0.0),
        }
    }
}

// ---------------------------------------------------------------------------
// NP Chart
// ---------------------------------------------------------------------------

/// Count of nonconforming items (NP) chart.
///
/// An immutable snapshot: the limits and the classification of every
/// observation are computed once in [`NPChart::compute`] and never change.
/// A new series means a new chart.
///
/// # Reference
///
/// Montgomery, D.C. (2019). *Introduction to Statistical Quality Control*, 8th ed.,
/// Chapter 7, Section 7.3.
#[derive(Debug, Clone, PartialEq)]
pub struct NPChart {
    parameters: ChartParameters,
    sigma: f64,
    limits: ControlLimits,
    samples: Vec<ClassifiedSample>,
}

impl NPChart {
    /// Compute limits from `parameters` and classify each observation.
    ///
    /// Sample numbers are 1-based and follow input order. An empty series
    /// yields valid limits and no samples.
    pub fn compute(parameters: &ChartParameters, observations: &[i64]) -> Self {
        let sigma = parameters.sigma();
        let limits = parameters.control_limits();

        let samples: Vec<ClassifiedSample> = observations
            .iter()
            .enumerate()
            .map(|(i, &value)| ClassifiedSample {
                index: i + 1,
                value,
                in_control: limits.contains(value as f64),
            })
            .collect();

        debug!(
            n = parameters.sample_size(),
            p = parameters.defect_rate(),
            cl = limits.cl,
            sigma,
            ucl = limits.ucl,
            lcl = limits.lcl,
            samples = samples.len(),
            "computed np chart limits"
        );

        let flagged = samples.iter().filter(|s| s.is_out_of_control()).count();
        if flagged > 0 {
            debug!(flagged, "np chart has out-of-control points");
        }

        Self {
            parameters: *parameters,
            sigma,
            limits,
            samples,
        }
    }

    /// The parameters this chart was computed from.
    pub fn parameters(&self) -> &ChartParameters {
        &self.parameters
    }

    /// The binomial standard deviation used for the limits.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// The control limits (constant for the NP chart).
    pub fn control_limits(&self) -> &ControlLimits {
        &self.limits
    }

    /// All classified samples, in input order.
    pub fn samples(&self) -> &[ClassifiedSample] {
        &self.samples
    }

    /// Whether the raw lower limit `CL - 3 sigma` was negative and raised to zero.
    pub fn lcl_clamped(&self) -> bool {
        self.limits.cl - 3.0 * self.sigma < 0.0
    }

    /// Check if the process is in statistical control.
    pub fn is_in_control(&self) -> bool {
        self.samples.iter().all(|s| s.in_control)
    }

    /// Samples beyond the control limits, in input order.
    pub fn out_of_control(&self) -> impl Iterator<Item = &ClassifiedSample> + '_ {
        self.samples.iter().filter(|s| s.is_out_of_control())
    }

    /// 1-based sample numbers of the out-of-control points.
    pub fn out_of_control_indices(&self) -> Vec<usize> {
        self.out_of_control().map(|s| s.index).collect()
    }

    /// Observed values of the out-of-control points.
    pub fn out_of_control_values(&self) -> Vec<i64> {
        self.out_of_control().map(|s| s.value).collect()
    }
}

/// Compute an NP chart from a sample size `n`, defect rate `p`, and the
/// observed defective counts.
///
/// # Errors
///
/// Returns [`NpChartError::DomainViolation`] if `n == 0` or `p` is outside
/// `[0, 1]`. Valid inputs cannot fail.
///
/// # Examples
///
/// ```
/// use np_chart::spc::compute;
///
/// let chart = compute(50, 0.08, &[4, 9, 11]).unwrap();
/// assert!((chart.control_limits().cl - 4.0).abs() < 1e-9);
/// assert_eq!(chart.out_of_control_indices(), vec![3]);
/// ```
pub fn compute(n: u64, p: f64, observations: &[i64]) -> Result<NPChart> {
    let parameters = ChartParameters::new(n, p)?;
    Ok(NPChart::compute(&parameters, observations))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
