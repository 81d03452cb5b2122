//! Collector simulation and performance analysis.
//!
//! Simulation follows the Hottel-Whillier-Bliss formulation:
//!
//! ```text
//! Q_u = A · F_R · (τα · G − U_L · (T_in − T_amb))⁺
//! T_out = T_in + Q_u / (ṁ · c_p)
//! ```
//!
//! Faults perturb a copy of the collector parameters before the physics runs,
//! except sensor drift which biases the reported outlet temperature.

mod degradation;
mod fault_injection;
mod input;
mod results;
mod simulate;

pub use degradation::{DegradationThresholds, OperatingState, PerformanceAnalysis};
pub use input::OperatingConditions;
pub use results::SimulationResult;

pub(super) use degradation::analyze;
pub(super) use simulate::simulate;
