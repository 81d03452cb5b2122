use crate::support::{
    constraint::{Constrained, NonNegative},
    units::TemperatureDifference,
};
use uom::si::f64::{HeatFluxDensity, MassRate, Power, ThermodynamicTemperature};

use super::{CapacitanceRate, CollectorParameters, ThermalEfficiency};

/// Observed collector performance.
///
/// Heat rates are never negative and efficiency stays within [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceMetrics {
    heat_gain: Constrained<Power, NonNegative>,
    heat_loss: Constrained<Power, NonNegative>,
    efficiency: ThermalEfficiency,
}

impl PerformanceMetrics {
    /// Metrics of a collector delivering nothing.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            heat_gain: NonNegative::zero(),
            heat_loss: NonNegative::zero(),
            efficiency: ThermalEfficiency::zero(),
        }
    }

    /// Derives performance from measured temperatures and flow.
    ///
    /// - Useful gain is `m·c_p·(T_out − T_in)`, with a measured temperature
    ///   drop treated as zero gain.
    /// - Efficiency is gain over incident power `G·A`, clamped to [0, 1], and
    ///   zero without sun.
    /// - Loss is the energy-balance residual `G·A − Q_u`, floored at zero.
    ///
    /// Without forward flow there is no measurable gain, so all metrics are
    /// zero.
    #[must_use]
    pub fn from_measurement(
        parameters: &CollectorParameters,
        irradiance: HeatFluxDensity,
        inlet_temperature: ThermodynamicTemperature,
        outlet_temperature: ThermodynamicTemperature,
        mass_flow: MassRate,
    ) -> Self {
        let Ok(c_dot) =
            CapacitanceRate::from_mass_rate_and_specific_heat(mass_flow, parameters.specific_heat)
        else {
            return Self::zero();
        };

        let gain: Power = *c_dot * outlet_temperature.minus(inlet_temperature);
        let heat_gain = NonNegative::saturating(gain);

        let incident: Power = irradiance * parameters.area;
        let efficiency = ThermalEfficiency::from_heat_rates(heat_gain.into_inner(), incident);
        let heat_loss = NonNegative::saturating(incident - heat_gain.into_inner());

        Self {
            heat_gain,
            heat_loss,
            efficiency,
        }
    }

    /// Useful heat gain delivered to the fluid, `Q_u`.
    #[must_use]
    pub fn heat_gain(&self) -> Power {
        self.heat_gain.into_inner()
    }

    /// Heat lost to the surroundings, `Q_loss`.
    #[must_use]
    pub fn heat_loss(&self) -> Power {
        self.heat_loss.into_inner()
    }

    /// Thermal efficiency, `η`.
    #[must_use]
    pub fn efficiency(&self) -> ThermalEfficiency {
        self.efficiency
    }
}
