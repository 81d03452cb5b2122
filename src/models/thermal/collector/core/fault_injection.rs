use tracing::debug;
use uom::{
    ConstZero,
    si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin},
};

use crate::support::{collector::CollectorParameters, diagnosis::FaultLabel};

/// Dust scales the transmittance-absorptance product.
const DUST_OPTICAL_FACTOR: f64 = 0.60;

/// Failed insulation scales the loss coefficient.
const LEAKAGE_LOSS_FACTOR: f64 = 8.0;

/// A weak pump scales the efficiency factor.
const PUMP_EFFICIENCY_FACTOR: f64 = 0.6;

/// Sensor drift biases the outlet reading, in kelvin.
const SENSOR_DRIFT_BIAS: f64 = 8.5;

/// Collector parameters and outlet sensor bias with a fault applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct InjectedFault {
    pub(super) parameters: CollectorParameters,
    pub(super) outlet_bias: TemperatureInterval,
}

/// Applies `fault` to a copy of `base`.
pub(super) fn inject(base: &CollectorParameters, fault: Option<FaultLabel>) -> InjectedFault {
    let mut parameters = *base;
    let mut outlet_bias = TemperatureInterval::ZERO;

    let Some(fault) = fault else {
        return InjectedFault {
            parameters,
            outlet_bias,
        };
    };

    match fault {
        FaultLabel::DustAccumulation => {
            parameters.transmittance_absorptance =
                base.transmittance_absorptance * DUST_OPTICAL_FACTOR;
        }
        FaultLabel::HeatLeakage => {
            parameters.loss_coefficient = base.loss_coefficient * LEAKAGE_LOSS_FACTOR;
        }
        FaultLabel::PumpDegradation => {
            parameters.efficiency_factor = base.efficiency_factor * PUMP_EFFICIENCY_FACTOR;
        }
        FaultLabel::SensorDrift => {
            outlet_bias = TemperatureInterval::new::<delta_kelvin>(SENSOR_DRIFT_BIAS);
        }
        FaultLabel::NormalCondition | FaultLabel::LowEfficiency => {}
    }

    debug!(%fault, "injected collector fault");

    InjectedFault {
        parameters,
        outlet_bias,
    }
}
