//! Statistical Process Control (SPC) chart for attributes data.
//!
//! # Attributes Charts
//!
//! - [`NPChart`] — Count of nonconforming items (constant sample size,
//!   known historical defect rate)
//!
//! [`compute`] is the single entry point: it validates `(n, p)` and
//! returns an immutable chart with control limits and the in/out-of-control
//! classification of every observation.
//!
//! # References
//!
//! - Montgomery, D.C. (2019). *Introduction to Statistical Quality Control*, 8th ed.
//! - ASTM E2587 — Standard Practice for Use of Control Charts

mod attributes;
mod chart;

pub use attributes::{compute, ChartParameters, NPChart};
pub use chart::{ClassifiedSample, ControlLimits};
