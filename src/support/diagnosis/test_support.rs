use uom::si::{
    f64::{HeatFluxDensity, MassRate, Power, Ratio, ThermodynamicTemperature},
    heat_flux_density::watt_per_square_meter,
    mass_rate::kilogram_per_second,
    power::watt,
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
};

use super::{ClassProbabilities, Classifier, ClassifierError, FaultLabel, FeatureVector};

/// Returns fixed answers regardless of the features.
#[derive(Debug, Clone)]
pub(crate) struct StubClassifier {
    label: FaultLabel,
    probabilities: ClassProbabilities,
}

impl StubClassifier {
    pub(crate) fn new(label: FaultLabel, probabilities: ClassProbabilities) -> Self {
        Self {
            label,
            probabilities,
        }
    }

    /// Predicts `label` with the given probability, splitting the rest evenly.
    pub(crate) fn confident(label: FaultLabel, probability: f64) -> Self {
        let others = FaultLabel::ALL.len() as f64 - 1.0;
        let probabilities = FaultLabel::ALL
            .into_iter()
            .map(|l| {
                if l == label {
                    (l, probability)
                } else {
                    (l, (1.0 - probability) / others)
                }
            })
            .collect();
        Self::new(label, probabilities)
    }
}

impl Classifier for StubClassifier {
    fn predict(&self, _: &FeatureVector) -> Result<FaultLabel, ClassifierError> {
        Ok(self.label)
    }

    fn predict_probabilities(&self, _: &FeatureVector) -> Result<ClassProbabilities, ClassifierError> {
        Ok(self.probabilities.clone())
    }
}

/// Fails every inference.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn predict(&self, _: &FeatureVector) -> Result<FaultLabel, ClassifierError> {
        Err(ClassifierError::Inference("model not loaded".into()))
    }

    fn predict_probabilities(&self, _: &FeatureVector) -> Result<ClassProbabilities, ClassifierError> {
        Err(ClassifierError::Inference("model not loaded".into()))
    }
}

/// Features of a dusty collector at 800 W/m².
pub(crate) fn sample_features() -> FeatureVector {
    FeatureVector {
        irradiance: HeatFluxDensity::new::<watt_per_square_meter>(800.0),
        inlet_temperature: ThermodynamicTemperature::new::<degree_celsius>(30.0),
        outlet_temperature: ThermodynamicTemperature::new::<degree_celsius>(35.3),
        mass_flow: MassRate::new::<kilogram_per_second>(0.03),
        efficiency: Ratio::new::<percent>(41.58),
        heat_gain: Power::new::<watt>(665.28),
    }
}
