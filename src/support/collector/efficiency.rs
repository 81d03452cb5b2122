use std::ops::Deref;

use crate::support::constraint::{Constrained, UnitInterval};
use uom::{
    ConstZero,
    si::{
        f64::{Power, Ratio},
        ratio::percent,
    },
};

/// Thermal efficiency of a collector.
///
/// The ratio of useful heat gain to incident solar power, always within
/// [0, 1]. Values are reported in percent.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ThermalEfficiency(Constrained<Ratio, UnitInterval>);

impl ThermalEfficiency {
    /// Zero efficiency.
    #[must_use]
    pub fn zero() -> Self {
        Self(UnitInterval::zero())
    }

    /// Computes `useful_gain / incident`, clamped to [0, 1].
    ///
    /// Returns zero when there is no incident power.
    #[must_use]
    pub fn from_heat_rates(useful_gain: Power, incident: Power) -> Self {
        if incident > Power::ZERO {
            let ratio: Ratio = useful_gain / incident;
            Self(UnitInterval::saturating(ratio))
        } else {
            Self::zero()
        }
    }

    /// Returns the efficiency in percent.
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.0.as_ref().get::<percent>()
    }
}

impl Deref for ThermalEfficiency {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
