use uom::si::f64::{HeatFluxDensity, MassRate, ThermodynamicTemperature};

use crate::support::diagnosis::FaultLabel;

/// Environmental and operating inputs for one collector operating point.
///
/// A mass flow of zero or less is accepted and treated as no flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingConditions {
    /// Solar irradiance on the collector plane.
    pub irradiance: HeatFluxDensity,

    pub inlet_temperature: ThermodynamicTemperature,

    pub ambient_temperature: ThermodynamicTemperature,

    pub mass_flow: MassRate,

    /// Fault to inject, if any.
    ///
    /// `None` and [`FaultLabel::NormalCondition`] both simulate a healthy
    /// collector, as does [`FaultLabel::LowEfficiency`], which has no
    /// physical fault model.
    pub fault: Option<FaultLabel>,
}

impl OperatingConditions {
    /// Creates fault-free operating conditions.
    #[must_use]
    pub fn new(
        irradiance: HeatFluxDensity,
        inlet_temperature: ThermodynamicTemperature,
        ambient_temperature: ThermodynamicTemperature,
        mass_flow: MassRate,
    ) -> Self {
        Self {
            irradiance,
            inlet_temperature,
            ambient_temperature,
            mass_flow,
            fault: None,
        }
    }

    /// Returns the same conditions with `fault` injected.
    #[must_use]
    pub fn with_fault(self, fault: FaultLabel) -> Self {
        Self {
            fault: Some(fault),
            ..self
        }
    }

    /// Returns the same conditions without an injected fault.
    #[must_use]
    pub fn without_fault(self) -> Self {
        Self {
            fault: None,
            ..self
        }
    }
}
