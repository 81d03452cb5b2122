use serde::{Deserialize, Serialize};
use uom::{
    ConstZero,
    si::{f64::Ratio, f64::ThermodynamicTemperature, ratio::percent},
};

use crate::support::collector::{CollectorParameters, PerformanceMetrics};

use super::{OperatingConditions, SimulationResult, simulate};

/// Degradation levels that separate operating states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegradationThresholds {
    /// Degradation above which operation is [`OperatingState::Suboptimal`].
    pub suboptimal: Ratio,

    /// Degradation above which operation is [`OperatingState::Critical`].
    pub critical: Ratio,
}

impl Default for DegradationThresholds {
    fn default() -> Self {
        Self {
            suboptimal: Ratio::new::<percent>(10.0),
            critical: Ratio::new::<percent>(25.0),
        }
    }
}

impl DegradationThresholds {
    fn classify(&self, degradation: Ratio) -> OperatingState {
        if degradation > self.critical {
            OperatingState::Critical
        } else if degradation > self.suboptimal {
            OperatingState::Suboptimal
        } else {
            OperatingState::Optimal
        }
    }
}

/// How a collector is performing relative to fault-free operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatingState {
    Optimal,
    Suboptimal,
    Critical,
}

impl OperatingState {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            OperatingState::Optimal => "System is operating normally.",
            OperatingState::Suboptimal => {
                "Performance is significantly below theoretical maximum."
            }
            OperatingState::Critical => "Major performance loss detected. Check for faults.",
        }
    }
}

/// Measured performance compared against a fault-free baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceAnalysis {
    /// Metrics derived from the measured outlet temperature.
    pub measured: PerformanceMetrics,

    /// Fault-free simulation under the same conditions.
    pub baseline: SimulationResult,

    /// Relative efficiency shortfall, `(η_baseline − η_measured) / η_baseline`.
    ///
    /// Negative when the measurement beats the baseline, and zero when the
    /// baseline has no efficiency.
    pub degradation: Ratio,

    pub state: OperatingState,
}

pub(crate) fn analyze(
    parameters: &CollectorParameters,
    thresholds: &DegradationThresholds,
    conditions: &OperatingConditions,
    measured_outlet: ThermodynamicTemperature,
) -> PerformanceAnalysis {
    let measured = PerformanceMetrics::from_measurement(
        parameters,
        conditions.irradiance,
        conditions.inlet_temperature,
        measured_outlet,
        conditions.mass_flow,
    );
    let baseline = simulate(parameters, &conditions.without_fault());

    let ideal = *baseline.metrics().efficiency();
    let actual = *measured.efficiency();
    let degradation: Ratio = if ideal > Ratio::ZERO {
        (ideal - actual) / ideal
    } else {
        Ratio::ZERO
    };

    PerformanceAnalysis {
        measured,
        baseline,
        degradation,
        state: thresholds.classify(degradation),
    }
}
