use serde::{Deserialize, Serialize};
use uom::si::{power::watt, ratio::percent, thermodynamic_temperature::degree_celsius};

use crate::support::units::round_to;

use super::{OperatingState, PerformanceAnalysis, SimulationResult};

/// Simulation outcome rounded to two decimals.
///
/// Heat rates are in W, efficiency in % and temperature in °C.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub useful_heat_gain: f64,
    pub heat_loss: f64,
    pub thermal_efficiency: f64,
    pub simulated_outlet_temperature: f64,
}

impl From<&SimulationResult> for SimulationReport {
    fn from(result: &SimulationResult) -> Self {
        let metrics = result.metrics();
        Self {
            useful_heat_gain: round_to(metrics.heat_gain().get::<watt>(), 2),
            heat_loss: round_to(metrics.heat_loss().get::<watt>(), 2),
            thermal_efficiency: round_to(metrics.efficiency().percent(), 2),
            simulated_outlet_temperature: round_to(
                result.outlet_temperature().get::<degree_celsius>(),
                2,
            ),
        }
    }
}

/// Performance analysis rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub thermal_efficiency: f64,
    pub heat_gain: f64,
    pub heat_loss: f64,
    pub performance_degradation: f64,
    pub condition: OperatingState,
    pub message: String,
}

impl From<&PerformanceAnalysis> for PerformanceReport {
    fn from(analysis: &PerformanceAnalysis) -> Self {
        let measured = &analysis.measured;
        Self {
            thermal_efficiency: round_to(measured.efficiency().percent(), 2),
            heat_gain: round_to(measured.heat_gain().get::<watt>(), 2),
            heat_loss: round_to(measured.heat_loss().get::<watt>(), 2),
            performance_degradation: round_to(analysis.degradation.get::<percent>(), 2),
            condition: analysis.state,
            message: analysis.state.message().to_owned(),
        }
    }
}
