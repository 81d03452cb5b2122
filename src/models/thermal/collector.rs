//! Flat-plate solar collector model.
//!
//! [`FlatPlateCollector`] implements [`twine_core::Model`] for forward
//! simulation of a collector under given [`OperatingConditions`], optionally
//! with an injected fault. The computational core is in the internal `core`
//! module.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_solar_thermal::{
//!     models::thermal::collector::{FlatPlateCollector, OperatingConditions, SimulationReport},
//!     support::diagnosis::FaultLabel,
//! };
//! use uom::si::{
//!     f64::{HeatFluxDensity, MassRate, ThermodynamicTemperature},
//!     heat_flux_density::watt_per_square_meter,
//!     mass_rate::kilogram_per_second,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let collector = FlatPlateCollector::default();
//! let conditions = OperatingConditions::new(
//!     HeatFluxDensity::new::<watt_per_square_meter>(800.0),
//!     ThermodynamicTemperature::new::<degree_celsius>(30.0),
//!     ThermodynamicTemperature::new::<degree_celsius>(25.0),
//!     MassRate::new::<kilogram_per_second>(0.03),
//! );
//!
//! let normal = collector.call(&conditions).unwrap();
//! let dusty = collector
//!     .call(&conditions.with_fault(FaultLabel::DustAccumulation))
//!     .unwrap();
//! assert!(dusty.metrics().efficiency() < normal.metrics().efficiency());
//!
//! let report = SimulationReport::from(&normal);
//! assert_eq!(report.thermal_efficiency, 71.11);
//! ```

mod core;
mod report;

pub use self::core::{
    DegradationThresholds, OperatingConditions, OperatingState, PerformanceAnalysis,
    SimulationResult,
};
pub use report::{PerformanceReport, SimulationReport};

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::ThermodynamicTemperature;

use crate::support::collector::CollectorParameters;

/// A flat-plate collector with fixed physical parameters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlatPlateCollector {
    parameters: CollectorParameters,
    thresholds: DegradationThresholds,
}

impl FlatPlateCollector {
    /// Creates a collector with the given parameters and default
    /// degradation thresholds.
    #[must_use]
    pub fn new(parameters: CollectorParameters) -> Self {
        Self {
            parameters,
            thresholds: DegradationThresholds::default(),
        }
    }

    /// Replaces the thresholds used by [`FlatPlateCollector::analyze`].
    #[must_use]
    pub fn with_thresholds(self, thresholds: DegradationThresholds) -> Self {
        Self { thresholds, ..self }
    }

    #[must_use]
    pub fn parameters(&self) -> &CollectorParameters {
        &self.parameters
    }

    #[must_use]
    pub fn thresholds(&self) -> &DegradationThresholds {
        &self.thresholds
    }

    /// Simulates the collector, applying any injected fault.
    ///
    /// Reported metrics are what instruments would observe at the simulated
    /// outlet, including any sensor bias.
    #[must_use]
    pub fn simulate(&self, conditions: &OperatingConditions) -> SimulationResult {
        core::simulate(&self.parameters, conditions)
    }

    /// Compares a measured outlet temperature against fault-free operation
    /// under the same conditions.
    ///
    /// Any fault in `conditions` is ignored when computing the baseline.
    #[must_use]
    pub fn analyze(
        &self,
        conditions: &OperatingConditions,
        measured_outlet: ThermodynamicTemperature,
    ) -> PerformanceAnalysis {
        core::analyze(&self.parameters, &self.thresholds, conditions, measured_outlet)
    }
}

impl Model for FlatPlateCollector {
    type Input = OperatingConditions;
    type Output = SimulationResult;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.simulate(input))
    }
}
