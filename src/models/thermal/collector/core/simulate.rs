use uom::si::f64::{HeatFluxDensity, Power, TemperatureInterval};

use crate::support::{
    collector::{CapacitanceRate, CollectorParameters, HeatRemovalFactor, PerformanceMetrics},
    constraint::NonNegative,
    units::TemperatureDifference,
};

use super::{OperatingConditions, SimulationResult, fault_injection};

/// Simulates the collector under `conditions`.
///
/// Net collected flux is floored at zero, so a collector losing more than it
/// absorbs delivers nothing rather than cooling the fluid. Without forward
/// flow the outlet equals the inlet.
///
/// Reported metrics are recomputed from the outlet temperature after any
/// sensor bias, which is how sensor drift becomes visible to diagnosis.
pub(crate) fn simulate(
    parameters: &CollectorParameters,
    conditions: &OperatingConditions,
) -> SimulationResult {
    let injected = fault_injection::inject(parameters, conditions.fault);
    let perturbed = &injected.parameters;

    let f_r = HeatRemovalFactor::for_collector(conditions.mass_flow, perturbed);

    let absorbed: HeatFluxDensity = perturbed.transmittance_absorptance * conditions.irradiance;
    let lost: HeatFluxDensity = perturbed.loss_coefficient
        * conditions
            .inlet_temperature
            .minus(conditions.ambient_temperature);
    let net: HeatFluxDensity = *f_r * (absorbed - lost);
    let gain: Power = NonNegative::saturating(net).into_inner() * perturbed.area;

    let physical_outlet = match CapacitanceRate::from_mass_rate_and_specific_heat(
        conditions.mass_flow,
        perturbed.specific_heat,
    ) {
        Ok(c_dot) => {
            let rise: TemperatureInterval = gain / *c_dot;
            conditions.inlet_temperature + rise
        }
        Err(_) => conditions.inlet_temperature,
    };
    let outlet_temperature = physical_outlet + injected.outlet_bias;

    let metrics = PerformanceMetrics::from_measurement(
        parameters,
        conditions.irradiance,
        conditions.inlet_temperature,
        outlet_temperature,
        conditions.mass_flow,
    );

    SimulationResult::new(outlet_temperature, metrics)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use uom::si::{
        f64::{MassRate, ThermodynamicTemperature},
        heat_flux_density::watt_per_square_meter,
        mass_rate::kilogram_per_second,
        power::watt,
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::degree_celsius,
    };

    use super::*;
    use crate::support::diagnosis::FaultLabel;

    fn conditions(g: f64, t_in: f64, t_amb: f64, m_dot: f64) -> OperatingConditions {
        OperatingConditions::new(
            HeatFluxDensity::new::<watt_per_square_meter>(g),
            ThermodynamicTemperature::new::<degree_celsius>(t_in),
            ThermodynamicTemperature::new::<degree_celsius>(t_amb),
            MassRate::new::<kilogram_per_second>(m_dot),
        )
    }

    fn run(conditions: &OperatingConditions) -> SimulationResult {
        simulate(&CollectorParameters::default(), conditions)
    }

    fn assert_result(result: &SimulationResult, t_out: f64, q_u: f64, q_loss: f64, eta: f64) {
        assert_relative_eq!(
            result.outlet_temperature().get::<degree_celsius>(),
            t_out,
            epsilon = 1e-9
        );
        assert_relative_eq!(result.metrics().heat_gain().get::<watt>(), q_u, epsilon = 1e-6);
        assert_relative_eq!(result.metrics().heat_loss().get::<watt>(), q_loss, epsilon = 1e-6);
        assert_relative_eq!(result.metrics().efficiency().percent(), eta, epsilon = 1e-9);
    }

    #[test]
    fn normal_operation() {
        let result = run(&conditions(800.0, 30.0, 25.0, 0.03));
        assert_result(
            &result,
            39.059_909_794_891_79,
            1137.743_472_042_510_6,
            462.256_527_957_489_4,
            71.108_967_002_656_91,
        );
    }

    #[test]
    fn injected_faults() {
        let base = conditions(800.0, 30.0, 25.0, 0.03);

        let dust = run(&base.with_fault(FaultLabel::DustAccumulation));
        assert_result(
            &dust,
            35.297_626_643_425_275,
            665.275_953_881_346,
            934.724_046_118_654,
            41.579_747_117_584_13,
        );

        let leakage = run(&base.with_fault(FaultLabel::HeatLeakage));
        assert_result(
            &leakage,
            35.236_321_181_068_65,
            657.577_213_918_600_6,
            942.422_786_081_399_4,
            41.098_575_869_912_54,
        );

        let pump = run(&base.with_fault(FaultLabel::PumpDegradation));
        assert_result(
            &pump,
            35.513_667_856_480_38,
            692.406_409_416_806_4,
            907.593_590_583_193_6,
            43.275_400_588_550_4,
        );
    }

    #[test]
    fn sensor_drift_is_observed_not_physical() {
        let result = run(&conditions(800.0, 30.0, 25.0, 0.03).with_fault(FaultLabel::SensorDrift));

        // Gain implied by the biased reading exceeds the incident power.
        assert_result(&result, 47.559_909_794_891_79, 2205.173_472_042_510_6, 0.0, 100.0);
    }

    #[test]
    fn losses_exceeding_absorption_deliver_nothing() {
        let result = run(&conditions(500.0, 45.0, 20.0, 0.02).with_fault(FaultLabel::HeatLeakage));
        assert_result(&result, 45.0, 0.0, 1000.0, 0.0);
    }

    #[test]
    fn no_flow_keeps_inlet_temperature() {
        for m_dot in [0.0, -0.02] {
            let result = run(&conditions(800.0, 30.0, 25.0, m_dot));
            assert_result(&result, 30.0, 0.0, 0.0, 0.0);
        }
    }

    #[test]
    fn no_sun() {
        let result = run(&conditions(0.0, 30.0, 25.0, 0.03));
        assert_result(&result, 30.0, 0.0, 0.0, 0.0);
    }

    #[test]
    fn low_efficiency_has_no_fault_model() {
        let base = conditions(800.0, 30.0, 25.0, 0.03);
        assert_eq!(run(&base.with_fault(FaultLabel::LowEfficiency)), run(&base));
        assert_eq!(run(&base.with_fault(FaultLabel::NormalCondition)), run(&base));
    }

    #[test]
    fn base_parameters_are_untouched() {
        let parameters = CollectorParameters::default();
        let _ = simulate(
            &parameters,
            &conditions(800.0, 30.0, 25.0, 0.03).with_fault(FaultLabel::HeatLeakage),
        );
        assert_eq!(parameters, CollectorParameters::default());
    }

    proptest! {
        #[test]
        fn heat_leakage_lowers_efficiency(
            g in 200.0..1000.0_f64,
            t_amb in 20.0..40.0_f64,
            dt in 0.5..20.0_f64,
            m_dot in 0.01..0.05_f64,
        ) {
            let base = conditions(g, t_amb + dt, t_amb, m_dot);
            let normal = run(&base);
            let leakage = run(&base.with_fault(FaultLabel::HeatLeakage));

            prop_assert!(leakage.metrics().efficiency() < normal.metrics().efficiency());
        }

        #[test]
        fn sensor_drift_adds_fixed_bias(
            g in 0.0..1200.0_f64,
            t_in in 10.0..80.0_f64,
            t_amb in -10.0..40.0_f64,
            m_dot in 0.0..0.1_f64,
        ) {
            let base = conditions(g, t_in, t_amb, m_dot);
            let normal = run(&base);
            let drift = run(&base.with_fault(FaultLabel::SensorDrift));

            let bias = drift.outlet_temperature().minus(normal.outlet_temperature());
            prop_assert!((bias.get::<delta_kelvin>() - 8.5).abs() < 1e-9);
        }

        #[test]
        fn simulated_metrics_stay_physical(
            g in -100.0..1500.0_f64,
            t_in in 0.0..100.0_f64,
            t_amb in -20.0..50.0_f64,
            m_dot in -0.05..0.2_f64,
            fault in proptest::sample::select(FaultLabel::ALL.to_vec()),
        ) {
            let result = run(&conditions(g, t_in, t_amb, m_dot).with_fault(fault));

            prop_assert!(result.metrics().heat_gain().get::<watt>() >= 0.0);
            prop_assert!(result.metrics().heat_loss().get::<watt>() >= 0.0);
            prop_assert!((0.0..=100.0).contains(&result.metrics().efficiency().percent()));
        }
    }
}
