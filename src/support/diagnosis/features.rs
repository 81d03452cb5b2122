use uom::si::{
    f64::{Area, HeatFluxDensity, MassRate, Power, Ratio, TemperatureInterval, ThermodynamicTemperature},
    heat_flux_density::watt_per_square_meter,
    mass_rate::kilogram_per_second,
    power::watt,
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::TemperatureDifference;

/// Observations of one collector operating point, used for diagnosis.
///
/// Values are taken as given. A measured efficiency above 100 % is a symptom
/// worth diagnosing, so nothing here is clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub irradiance: HeatFluxDensity,
    pub inlet_temperature: ThermodynamicTemperature,
    pub outlet_temperature: ThermodynamicTemperature,
    pub mass_flow: MassRate,
    pub efficiency: Ratio,
    pub heat_gain: Power,
}

impl FeatureVector {
    /// Outlet minus inlet temperature.
    #[must_use]
    pub fn temperature_rise(&self) -> TemperatureInterval {
        self.outlet_temperature.minus(self.inlet_temperature)
    }

    /// Energy-balance residual `G·A − Q_u` for a collector of the given area.
    ///
    /// May be negative when the reported gain exceeds the incident power.
    #[must_use]
    pub fn heat_loss(&self, area: Area) -> Power {
        self.irradiance * area - self.heat_gain
    }

    /// Flattens the features in the order classifiers are trained on.
    ///
    /// Units are W/m², °C, °C, kg/s, % and W.
    #[must_use]
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.irradiance.get::<watt_per_square_meter>(),
            self.inlet_temperature.get::<degree_celsius>(),
            self.outlet_temperature.get::<degree_celsius>(),
            self.mass_flow.get::<kilogram_per_second>(),
            self.efficiency.get::<percent>(),
            self.heat_gain.get::<watt>(),
        ]
    }
}
