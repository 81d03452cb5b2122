use uom::si::f64::ThermodynamicTemperature;

use crate::support::{collector::PerformanceMetrics, diagnosis::FeatureVector};

use super::OperatingConditions;

/// Outcome of a collector simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationResult {
    outlet_temperature: ThermodynamicTemperature,
    metrics: PerformanceMetrics,
}

impl SimulationResult {
    pub(super) fn new(
        outlet_temperature: ThermodynamicTemperature,
        metrics: PerformanceMetrics,
    ) -> Self {
        Self {
            outlet_temperature,
            metrics,
        }
    }

    /// Outlet temperature as reported by the outlet sensor.
    #[must_use]
    pub fn outlet_temperature(&self) -> ThermodynamicTemperature {
        self.outlet_temperature
    }

    /// Metrics derived from the reported outlet temperature.
    #[must_use]
    pub fn metrics(&self) -> &PerformanceMetrics {
        &self.metrics
    }

    /// Features for diagnosing this result as if it were a measurement.
    #[must_use]
    pub fn features(&self, conditions: &OperatingConditions) -> FeatureVector {
        FeatureVector {
            irradiance: conditions.irradiance,
            inlet_temperature: conditions.inlet_temperature,
            outlet_temperature: self.outlet_temperature,
            mass_flow: conditions.mass_flow,
            efficiency: *self.metrics.efficiency(),
            heat_gain: self.metrics.heat_gain(),
        }
    }
}
