//! Extensions to [`uom`].
//!
//! All physical quantities in this crate are [`uom`] SI quantities. This
//! module adds what the collector models need but [`uom`] lacks:
//!
//! - [`TemperatureDifference::minus`] subtracts two absolute temperatures to
//!   give a [`TemperatureInterval`](uom::si::f64::TemperatureInterval), used
//!   for the collector temperature rise and the inlet-to-ambient difference.
//! - [`round_to`] rounds reported values at the API boundary.
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use twine_solar_thermal::support::units::TemperatureDifference;
//!
//! let t_in = ThermodynamicTemperature::new::<degree_celsius>(30.0);
//! let t_out = ThermodynamicTemperature::new::<degree_celsius>(39.06);
//! let _rise = t_out.minus(t_in);
//! ```

mod rounding;
mod temperature_difference;

pub use rounding::round_to;
pub use temperature_difference::TemperatureDifference;
