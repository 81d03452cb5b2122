use std::ops::Deref;

use uom::{
    ConstZero,
    si::{
        f64::{Area, HeatTransfer, MassRate, Ratio, SpecificHeatCapacity, ThermalConductance},
        ratio::ratio,
    },
};

use super::{CapacitanceRate, CollectorParameters};

/// Collector heat-removal factor, `F_R`.
///
/// The ratio of the useful gain actually delivered to the fluid to the gain
/// that would be delivered if the whole absorber were at the fluid inlet
/// temperature. For a flat-plate collector (Hottel-Whillier-Bliss):
///
/// ```text
/// F_R = (m·c_p / (A·U_L)) · (1 − exp(−F′·U_L·A / (m·c_p)))
/// ```
///
/// `F_R` is zero when the fluid is not flowing, and tends to `F′` as the flow
/// rate grows.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HeatRemovalFactor(Ratio);

impl HeatRemovalFactor {
    /// The heat-removal factor of a collector with no flow.
    #[must_use]
    pub fn none() -> Self {
        Self(Ratio::ZERO)
    }

    /// Calculates `F_R` from the flow and the collector's physical constants.
    ///
    /// Non-positive mass flow yields [`HeatRemovalFactor::none`].
    /// A collector without losses (`A·U_L = 0`) yields its efficiency factor,
    /// which is the limit of the expression above.
    #[must_use]
    pub fn calculate(
        mass_flow: MassRate,
        specific_heat: SpecificHeatCapacity,
        area: Area,
        loss_coefficient: HeatTransfer,
        efficiency_factor: Ratio,
    ) -> Self {
        let Ok(c_dot) = CapacitanceRate::from_mass_rate_and_specific_heat(mass_flow, specific_heat)
        else {
            return Self::none();
        };

        let loss_conductance: ThermalConductance = area * loss_coefficient;
        if loss_conductance <= ThermalConductance::ZERO {
            return Self(efficiency_factor);
        }

        let exponent: Ratio = efficiency_factor * loss_conductance / *c_dot;
        let capacity_ratio: Ratio = *c_dot / loss_conductance;

        // `-expm1(-x)` is `1 - exp(-x)` without cancellation at high flow.
        let removed = -(-exponent.get::<ratio>()).exp_m1();

        Self(capacity_ratio * removed)
    }

    /// Calculates `F_R` for a collector described by `parameters`.
    #[must_use]
    pub fn for_collector(mass_flow: MassRate, parameters: &CollectorParameters) -> Self {
        Self::calculate(
            mass_flow,
            parameters.specific_heat,
            parameters.area,
            parameters.loss_coefficient,
            parameters.efficiency_factor,
        )
    }
}

impl Deref for HeatRemovalFactor {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
