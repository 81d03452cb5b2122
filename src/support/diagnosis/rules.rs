use tracing::debug;
use uom::{
    ConstZero,
    si::{
        f64::{Area, HeatFluxDensity, MassRate, Power, Ratio, TemperatureInterval},
        heat_flux_density::watt_per_square_meter,
        mass_rate::kilogram_per_second,
        ratio::{percent, ratio},
        temperature_interval::degree_celsius as delta_celsius,
    },
};

use crate::support::collector::CollectorParameters;

use super::{FaultLabel, FeatureVector, Verdict};

/// Deterministic diagnosis from physical thresholds.
///
/// Rules are evaluated in a fixed order and the first match wins:
///
/// | Order | Condition                                         | Label            | Confidence |
/// |-------|---------------------------------------------------|------------------|------------|
/// | 1     | `η > 81 %`                                        | Sensor Drift     | 92 %       |
/// | 2     | `ṁ < 0.012 kg/s` or `ΔT > 42 K`                   | Pump Degradation | 95 %       |
/// | 3     | `G > 600 W/m²` and `η < 55 %`                     | Dust Accumulation| 88 %       |
/// | 4     | `Q_u > 0`, `Q_loss / Q_u > 0.8` and `η < 52 %`    | Heat Leakage     | 85 %       |
/// | 5     | `η < 40 %`                                        | Low Efficiency   | 75 %       |
/// | -     | otherwise                                         | Normal Condition | 100 %      |
///
/// `Q_loss` is the unclamped residual `G·A − Q_u`, so the diagnoser needs the
/// collector area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleDiagnoser {
    area: Area,
}

impl RuleDiagnoser {
    /// Creates a diagnoser for a collector with the given aperture area.
    #[must_use]
    pub fn new(area: Area) -> Self {
        Self { area }
    }

    /// Creates a diagnoser matching a collector's parameters.
    #[must_use]
    pub fn for_collector(parameters: &CollectorParameters) -> Self {
        Self::new(parameters.area)
    }

    /// Collector area used to compute heat loss.
    #[must_use]
    pub fn area(&self) -> Area {
        self.area
    }

    /// Returns the verdict of the first matching rule.
    #[must_use]
    pub fn diagnose(&self, features: &FeatureVector) -> Verdict {
        let evidence = Evidence {
            irradiance: features.irradiance,
            mass_flow: features.mass_flow,
            temperature_rise: features.temperature_rise(),
            efficiency: features.efficiency,
            heat_gain: features.heat_gain,
            heat_loss: features.heat_loss(self.area),
        };

        RULES
            .iter()
            .find(|rule| (rule.applies)(&evidence))
            .map_or(Verdict::new(FaultLabel::NormalCondition, 100.0), |rule| {
                debug!(rule = rule.name, label = %rule.label, "diagnostic rule matched");
                Verdict::new(rule.label, rule.confidence)
            })
    }
}

impl Default for RuleDiagnoser {
    fn default() -> Self {
        Self::for_collector(&CollectorParameters::default())
    }
}

struct Evidence {
    irradiance: HeatFluxDensity,
    mass_flow: MassRate,
    temperature_rise: TemperatureInterval,
    efficiency: Ratio,
    heat_gain: Power,
    heat_loss: Power,
}

struct Rule {
    name: &'static str,
    label: FaultLabel,
    /// Percent.
    confidence: f64,
    applies: fn(&Evidence) -> bool,
}

const RULES: [Rule; 5] = [
    Rule {
        name: "implausible_efficiency",
        label: FaultLabel::SensorDrift,
        confidence: 92.0,
        applies: implausible_efficiency,
    },
    Rule {
        name: "restricted_flow",
        label: FaultLabel::PumpDegradation,
        confidence: 95.0,
        applies: restricted_flow,
    },
    Rule {
        name: "optical_loss",
        label: FaultLabel::DustAccumulation,
        confidence: 88.0,
        applies: optical_loss,
    },
    Rule {
        name: "excess_thermal_loss",
        label: FaultLabel::HeatLeakage,
        confidence: 85.0,
        applies: excess_thermal_loss,
    },
    Rule {
        name: "underperforming",
        label: FaultLabel::LowEfficiency,
        confidence: 75.0,
        applies: underperforming,
    },
];

fn implausible_efficiency(e: &Evidence) -> bool {
    e.efficiency > Ratio::new::<percent>(81.0)
}

fn restricted_flow(e: &Evidence) -> bool {
    e.mass_flow < MassRate::new::<kilogram_per_second>(0.012)
        || e.temperature_rise > TemperatureInterval::new::<delta_celsius>(42.0)
}

fn optical_loss(e: &Evidence) -> bool {
    e.irradiance > HeatFluxDensity::new::<watt_per_square_meter>(600.0)
        && e.efficiency < Ratio::new::<percent>(55.0)
}

fn excess_thermal_loss(e: &Evidence) -> bool {
    if e.heat_gain <= Power::ZERO {
        return false;
    }
    let loss_to_gain: Ratio = e.heat_loss / e.heat_gain;
    loss_to_gain > Ratio::new::<ratio>(0.8) && e.efficiency < Ratio::new::<percent>(52.0)
}

fn underperforming(e: &Evidence) -> bool {
    e.efficiency < Ratio::new::<percent>(40.0)
}
