//! Collector fault diagnosis toolkit.
//!
//! Two independent signals are computed from the same measured
//! [`FeatureVector`]:
//!
//! - [`RuleDiagnoser`]: an ordered list of physical rules. The first rule that
//!   matches decides the [`Verdict`].
//! - A [`Classifier`]: an externally trained statistical model, treated as a
//!   black box that may be missing or may fail.
//!
//! [`fuse`] merges the two into a [`Diagnosis`] using a fixed precedence
//! policy in which physical rules win disagreements.
//!
//! # Example
//!
//! ```
//! use twine_solar_thermal::support::diagnosis::{
//!     FaultLabel, FeatureVector, FusionPolicy, RuleDiagnoser, fuse,
//! };
//! use uom::si::{
//!     f64::{HeatFluxDensity, MassRate, Power, Ratio, ThermodynamicTemperature},
//!     heat_flux_density::watt_per_square_meter,
//!     mass_rate::kilogram_per_second,
//!     power::watt,
//!     ratio::percent,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let features = FeatureVector {
//!     irradiance: HeatFluxDensity::new::<watt_per_square_meter>(800.0),
//!     inlet_temperature: ThermodynamicTemperature::new::<degree_celsius>(30.0),
//!     outlet_temperature: ThermodynamicTemperature::new::<degree_celsius>(35.3),
//!     mass_flow: MassRate::new::<kilogram_per_second>(0.03),
//!     efficiency: Ratio::new::<percent>(41.58),
//!     heat_gain: Power::new::<watt>(665.28),
//! };
//!
//! let rule_verdict = RuleDiagnoser::default().diagnose(&features);
//! let diagnosis = fuse(rule_verdict, None, &FusionPolicy::default());
//!
//! assert_eq!(diagnosis.label(), FaultLabel::DustAccumulation);
//! assert_eq!(diagnosis.advisory(), "Clean the collector glazing surface.");
//! ```

mod classifier;
mod confidence;
mod features;
mod fusion;
mod label;
mod rules;

#[cfg(test)]
pub(crate) mod test_support;

pub use classifier::{ClassProbabilities, Classifier, ClassifierError, NoClassifier, consult};
pub use confidence::{Confidence, Verdict};
pub use features::FeatureVector;
pub use fusion::{Diagnosis, FusionOutcome, FusionPolicy, fuse};
pub use label::{FaultLabel, ParseFaultLabelError, advisory_for};
pub use rules::RuleDiagnoser;
