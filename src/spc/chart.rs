//! Core control chart types.
//!
//! Defines the building blocks shared by the np chart: control limits and
//! classified sample points.
//!
//! # References
//!
//! - Montgomery, D.C. (2019). *Introduction to Statistical Quality Control*, 8th ed.
//! - ASTM E2587 — Standard Practice for Use of Control Charts

/// Control limits for a chart.
///
/// Represents the upper control limit (UCL), center line (CL), and lower
/// control limit (LCL) derived from the chart parameters.
///
/// # Invariants
///
/// - `0 <= lcl <= cl <= ucl`
/// - All values are finite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlLimits {
    /// Upper control limit (UCL = CL + 3 sigma).
    pub ucl: f64,
    /// Center line (expected count, n * p).
    pub cl: f64,
    /// Lower control limit (LCL = max(0, CL - 3 sigma)).
    pub lcl: f64,
}

impl ControlLimits {
    /// Whether `value` lies within `[lcl, ucl]`.
    ///
    /// Both bounds are inclusive: a value exactly on a limit is in control.
    pub fn contains(&self, value: f64) -> bool {
        !(value > self.ucl || value < self.lcl)
    }
}

/// A single observed sample, classified against the control limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedSample {
    /// The 1-based sample number.
    pub index: usize,
    /// The observed defective count.
    pub value: i64,
    /// Whether the value lies within the control limits.
    pub in_control: bool,
}

impl ClassifiedSample {
    /// Whether this sample falls strictly outside the control limits.
    pub fn is_out_of_control(&self) -> bool {
        !self.in_control
    }
}
