use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// Subtracting two [`ThermodynamicTemperature`] values is not allowed by
/// [`uom`], because the result is an interval rather than an absolute
/// temperature.
/// See [#380](https://github.com/iliekturtles/uom/issues/380).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::degree_celsius as delta_celsius,
        thermodynamic_temperature::degree_celsius,
    };

    #[test]
    fn collector_temperature_rise() {
        let t_in = ThermodynamicTemperature::new::<degree_celsius>(30.0);
        let t_out = ThermodynamicTemperature::new::<degree_celsius>(72.5);

        assert_relative_eq!(
            t_out.minus(t_in).get::<delta_celsius>(),
            42.5,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            t_in.minus(t_out).get::<delta_celsius>(),
            -42.5,
            epsilon = 1e-9
        );
    }
}
