use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// The operating condition of a collector loop.
///
/// Serialized using the display name (e.g. `"Dust Accumulation"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FaultLabel {
    /// No fault.
    #[serde(rename = "Normal Condition")]
    NormalCondition,
    /// Soiled glazing reducing optical gain.
    #[serde(rename = "Dust Accumulation")]
    DustAccumulation,
    /// Degraded insulation increasing thermal losses.
    #[serde(rename = "Heat Leakage")]
    HeatLeakage,
    /// Reduced circulation through the absorber.
    #[serde(rename = "Pump Degradation")]
    PumpDegradation,
    /// Outlet temperature sensor reading high.
    #[serde(rename = "Sensor Drift")]
    SensorDrift,
    /// Unexplained underperformance.
    ///
    /// Only produced by diagnostic rules; it has no physical fault model.
    #[serde(rename = "Low Efficiency")]
    LowEfficiency,
}

impl FaultLabel {
    /// Every label, in declaration order.
    pub const ALL: [FaultLabel; 6] = [
        FaultLabel::NormalCondition,
        FaultLabel::DustAccumulation,
        FaultLabel::HeatLeakage,
        FaultLabel::PumpDegradation,
        FaultLabel::SensorDrift,
        FaultLabel::LowEfficiency,
    ];

    /// Returns the display name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FaultLabel::NormalCondition => "Normal Condition",
            FaultLabel::DustAccumulation => "Dust Accumulation",
            FaultLabel::HeatLeakage => "Heat Leakage",
            FaultLabel::PumpDegradation => "Pump Degradation",
            FaultLabel::SensorDrift => "Sensor Drift",
            FaultLabel::LowEfficiency => "Low Efficiency",
        }
    }

    /// Returns true for [`FaultLabel::NormalCondition`].
    #[must_use]
    pub fn is_normal(self) -> bool {
        self == FaultLabel::NormalCondition
    }

    /// Maintenance advice for this condition.
    #[must_use]
    pub fn advisory(self) -> &'static str {
        match self {
            FaultLabel::NormalCondition => "System is healthy. No action required.",
            FaultLabel::DustAccumulation => "Clean the collector glazing surface.",
            FaultLabel::HeatLeakage => "Inspect insulation pipes and connections.",
            FaultLabel::PumpDegradation => "Check pump motor and flow rate settings.",
            FaultLabel::SensorDrift => "Calibrate temperature sensors.",
            FaultLabel::LowEfficiency => {
                "General system maintenance recommended. Check for multiple scaling issues."
            }
        }
    }

    /// Resolves a fault requested for simulation by name.
    ///
    /// Unknown names inject nothing, so they resolve to
    /// [`FaultLabel::NormalCondition`].
    #[must_use]
    pub fn injected(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            debug!(name, "unknown fault requested for simulation, using normal condition");
            FaultLabel::NormalCondition
        })
    }
}

impl fmt::Display for FaultLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a [`FaultLabel`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fault label: {0:?}")]
pub struct ParseFaultLabelError(pub String);

impl FromStr for FaultLabel {
    type Err = ParseFaultLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FaultLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| ParseFaultLabelError(s.to_owned()))
    }
}

/// Maintenance advice for a label given by name.
///
/// Names that are not a [`FaultLabel`] get a generic message.
#[must_use]
pub fn advisory_for(name: &str) -> &'static str {
    name.parse::<FaultLabel>()
        .map_or("Consult manual.", FaultLabel::advisory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_round_trip() {
        for label in FaultLabel::ALL {
            assert_eq!(label.to_string().parse::<FaultLabel>(), Ok(label));
        }
    }

    #[test]
    fn strict_parse_rejects_unknown_names() {
        assert_eq!(
            "Frozen Pipe".parse::<FaultLabel>(),
            Err(ParseFaultLabelError("Frozen Pipe".to_owned()))
        );
        assert!("dust accumulation".parse::<FaultLabel>().is_err());
    }

    #[test]
    fn unknown_injection_is_normal() {
        assert_eq!(FaultLabel::injected("Frozen Pipe"), FaultLabel::NormalCondition);
        assert_eq!(FaultLabel::injected("Heat Leakage"), FaultLabel::HeatLeakage);
    }

    #[test]
    fn advisory_falls_back_for_unknown_names() {
        assert_eq!(advisory_for("Sensor Drift"), "Calibrate temperature sensors.");
        assert_eq!(advisory_for("Frozen Pipe"), "Consult manual.");
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&FaultLabel::PumpDegradation).unwrap();
        assert_eq!(json, "\"Pump Degradation\"");

        let label: FaultLabel = serde_json::from_str("\"Low Efficiency\"").unwrap();
        assert_eq!(label, FaultLabel::LowEfficiency);
    }
}
