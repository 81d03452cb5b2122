//! # Twine Solar Thermal
//!
//! Flat-plate solar collector models and fault diagnosis for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations for simulating a
//!   collector loop and diagnosing its faults.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Physics and diagnosis
//!
//! The collector is modeled with the Hottel-Whillier-Bliss heat-removal
//! equation. Faults are injected by perturbing a copy of the collector
//! parameters, so a simulation reports what an instrument would observe.
//!
//! Diagnosis combines an ordered set of physical rules with an optional
//! statistical classifier. The classifier is an injected capability
//! ([`support::diagnosis::Classifier`]); when it is absent or fails, the rule
//! verdict is used unchanged.
//!
//! Note: Only utilities in [`support`] and the adapters in [`models`] are part
//! of the public API. Model-specific core code remains private.

pub mod models;
pub mod support;
