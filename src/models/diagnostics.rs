//! Fault diagnosis models.
//!
//! [`FaultDetector`] implements [`twine_core::Model`] by running the
//! diagnostic rules and an optional classifier on one [`FeatureVector`] and
//! fusing their verdicts. [`OperationsSummary`] aggregates simulations and
//! diagnoses for a monitoring dashboard.
//!
//! [`FeatureVector`]: crate::support::diagnosis::FeatureVector

mod fault_detector;
mod summary;

pub use fault_detector::{DiagnosisReport, FaultDetector};
pub use summary::{HistoryPoint, OperationsSummary, SummaryReport};
