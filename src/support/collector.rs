//! Flat-plate solar collector toolkit.
//!
//! General-purpose building blocks for collector thermal analysis, following
//! the Hottel-Whillier-Bliss formulation.
//!
//! # Overview
//!
//! A flat-plate collector absorbs `τα·G` per unit aperture and loses
//! `U_L·(T_in − T_amb)` to its surroundings. The heat-removal factor `F_R`
//! scales the net absorbed flux to the useful gain delivered to the fluid:
//!
//! ```text
//! Q_u = A · F_R · (τα·G − U_L·(T_in − T_amb))
//! ```
//!
//! This toolkit provides:
//!
//! - **Configuration**: [`CollectorParameters`]
//! - **Core types**: [`CapacitanceRate`], [`HeatRemovalFactor`], [`ThermalEfficiency`]
//! - **Observed performance**: [`PerformanceMetrics::from_measurement`]
//!
//! # Example
//!
//! ```
//! use twine_solar_thermal::support::collector::{CollectorParameters, HeatRemovalFactor};
//! use uom::si::{f64::MassRate, mass_rate::kilogram_per_second, ratio::ratio};
//!
//! let parameters = CollectorParameters::default();
//! let f_r = HeatRemovalFactor::for_collector(
//!     MassRate::new::<kilogram_per_second>(0.03),
//!     &parameters,
//! );
//! assert!((f_r.get::<ratio>() - 0.8685).abs() < 1e-4);
//! ```

mod capacitance_rate;
mod efficiency;
mod heat_removal;
mod parameters;
mod performance;

pub use capacitance_rate::CapacitanceRate;
pub use efficiency::ThermalEfficiency;
pub use heat_removal::HeatRemovalFactor;
pub use parameters::CollectorParameters;
pub use performance::PerformanceMetrics;
