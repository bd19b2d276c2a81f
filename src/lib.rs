//! # np-chart
//!
//! Control limits and out-of-control detection for np charts: the count
//! of defective items per sample of constant size, monitored against a
//! known historical defect rate.
//!
//! The crate is a pure computational kernel. Rendering the chart and
//! collecting form input belong to the caller; this crate supplies the
//! parsing and validation contract that such a caller relies on.
//!
//! ## Modules
//!
//! - [`spc`] — NP chart limits (CL, UCL, LCL) and sample classification
//! - [`input`] — Observation-text parsing and chart request validation
//! - [`error`] — Error taxonomy shared by both
//!
//! ## Example
//!
//! ```
//! use np_chart::input::parse_observations;
//! use np_chart::spc::compute;
//!
//! let observations = parse_observations("5, 7, 3, 6, 4, 10, 5, 4, 6").unwrap();
//! let chart = compute(100, 0.05, &observations).unwrap();
//! assert!(chart.is_in_control());
//! ```

pub mod error;
pub mod input;
pub mod spc;

pub use error::{NpChartError, Result};
