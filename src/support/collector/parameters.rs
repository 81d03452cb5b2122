use uom::si::{
    area::square_meter,
    f64::{Area, HeatTransfer, Ratio, SpecificHeatCapacity},
    heat_transfer::watt_per_square_meter_kelvin,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

/// Physical constants describing a flat-plate collector and its working fluid.
///
/// All fields are expected to be strictly positive, and both ratios at most
/// one. The [`Default`] value describes a 2 m² water-cooled collector.
///
/// Faults are modeled by perturbing a copy of these parameters; the value a
/// caller holds is never modified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectorParameters {
    /// Aperture area.
    pub area: Area,

    /// Specific heat of the working fluid.
    pub specific_heat: SpecificHeatCapacity,

    /// Collector efficiency factor, `F′`.
    pub efficiency_factor: Ratio,

    /// Transmittance-absorptance product, `τα`.
    pub transmittance_absorptance: Ratio,

    /// Overall loss coefficient, `U_L`.
    pub loss_coefficient: HeatTransfer,
}

impl Default for CollectorParameters {
    fn default() -> Self {
        Self {
            area: Area::new::<square_meter>(2.0),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4186.0),
            efficiency_factor: Ratio::new::<ratio>(0.90),
            transmittance_absorptance: Ratio::new::<ratio>(0.85),
            loss_coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(5.0),
        }
    }
}
