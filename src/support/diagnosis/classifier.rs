use thiserror::Error;
use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::constraint::UnitInterval;

use super::{Confidence, FaultLabel, FeatureVector, ParseFaultLabelError, Verdict};

/// Posterior probability per label, as returned by a [`Classifier`].
pub type ClassProbabilities = Vec<(FaultLabel, f64)>;

/// A trained statistical fault classifier.
///
/// Implementations wrap an externally trained model. Training, feature
/// scaling and persistence are the implementor's concern. Either method may
/// fail, in which case diagnosis continues from rules alone.
pub trait Classifier {
    /// Predicts the most likely label.
    ///
    /// # Errors
    ///
    /// Returns a [`ClassifierError`] if inference fails.
    fn predict(&self, features: &FeatureVector) -> Result<FaultLabel, ClassifierError>;

    /// Returns the posterior probability of each label.
    ///
    /// # Errors
    ///
    /// Returns a [`ClassifierError`] if inference fails.
    fn predict_probabilities(
        &self,
        features: &FeatureVector,
    ) -> Result<ClassProbabilities, ClassifierError>;
}

impl<C: Classifier + ?Sized> Classifier for &C {
    fn predict(&self, features: &FeatureVector) -> Result<FaultLabel, ClassifierError> {
        (**self).predict(features)
    }

    fn predict_probabilities(
        &self,
        features: &FeatureVector,
    ) -> Result<ClassProbabilities, ClassifierError> {
        (**self).predict_probabilities(features)
    }
}

impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn predict(&self, features: &FeatureVector) -> Result<FaultLabel, ClassifierError> {
        (**self).predict(features)
    }

    fn predict_probabilities(
        &self,
        features: &FeatureVector,
    ) -> Result<ClassProbabilities, ClassifierError> {
        (**self).predict_probabilities(features)
    }
}

/// A classifier that cannot exist.
///
/// Names the classifier type of a detector that diagnoses from rules alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoClassifier {}

impl Classifier for NoClassifier {
    fn predict(&self, _: &FeatureVector) -> Result<FaultLabel, ClassifierError> {
        match *self {}
    }

    fn predict_probabilities(&self, _: &FeatureVector) -> Result<ClassProbabilities, ClassifierError> {
        match *self {}
    }
}

/// Errors raised while consulting a [`Classifier`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifierError {
    /// The underlying model failed to produce an answer.
    #[error("classifier inference failed: {0}")]
    Inference(String),

    /// The model produced a label name that is not a [`FaultLabel`].
    #[error(transparent)]
    UnknownLabel(#[from] ParseFaultLabelError),

    /// The model returned an empty probability distribution.
    #[error("classifier returned no class probabilities")]
    NoProbabilities,

    /// A returned probability was outside [0, 1] or not a number.
    #[error("invalid probability {probability} for {label}")]
    InvalidProbability { label: FaultLabel, probability: f64 },
}

/// Asks a classifier for its verdict on the given features.
///
/// The label comes from [`Classifier::predict`] and the confidence is the
/// largest posterior from [`Classifier::predict_probabilities`].
///
/// # Errors
///
/// Propagates classifier failures and rejects empty or invalid
/// probability distributions.
pub fn consult<C: Classifier + ?Sized>(
    classifier: &C,
    features: &FeatureVector,
) -> Result<Verdict, ClassifierError> {
    let label = classifier.predict(features)?;
    let probabilities = classifier.predict_probabilities(features)?;

    let mut max_probability: Option<f64> = None;
    for (class, probability) in probabilities {
        if UnitInterval::new(probability).is_err() {
            return Err(ClassifierError::InvalidProbability {
                label: class,
                probability,
            });
        }
        max_probability = Some(max_probability.map_or(probability, |max| max.max(probability)));
    }
    let max_probability = max_probability.ok_or(ClassifierError::NoProbabilities)?;

    Ok(Verdict {
        label,
        confidence: Confidence::saturating(Ratio::new::<ratio>(max_probability)),
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::support::diagnosis::test_support::{
        FailingClassifier, StubClassifier, sample_features,
    };

    #[test]
    fn confidence_is_largest_posterior() {
        let classifier = StubClassifier::new(
            FaultLabel::DustAccumulation,
            vec![
                (FaultLabel::NormalCondition, 0.15),
                (FaultLabel::DustAccumulation, 0.8),
                (FaultLabel::HeatLeakage, 0.05),
            ],
        );

        let verdict = consult(&classifier, &sample_features()).unwrap();

        assert_eq!(verdict.label, FaultLabel::DustAccumulation);
        assert_relative_eq!(verdict.confidence.percent(), 80.0, epsilon = 1e-9);
    }

    #[test]
    fn inference_failure_propagates() {
        let error = consult(&FailingClassifier, &sample_features()).unwrap_err();
        assert!(matches!(error, ClassifierError::Inference(_)));
    }

    #[test]
    fn empty_distribution_is_rejected() {
        let classifier = StubClassifier::new(FaultLabel::HeatLeakage, vec![]);
        assert_eq!(
            consult(&classifier, &sample_features()),
            Err(ClassifierError::NoProbabilities)
        );
    }

    #[test]
    fn invalid_probability_is_rejected() {
        let classifier = StubClassifier::new(
            FaultLabel::HeatLeakage,
            vec![(FaultLabel::HeatLeakage, 1.3)],
        );
        assert!(matches!(
            consult(&classifier, &sample_features()),
            Err(ClassifierError::InvalidProbability {
                label: FaultLabel::HeatLeakage,
                ..
            })
        ));

        let classifier = StubClassifier::new(
            FaultLabel::HeatLeakage,
            vec![(FaultLabel::HeatLeakage, f64::NAN)],
        );
        assert!(consult(&classifier, &sample_features()).is_err());
    }

    #[test]
    fn unknown_label_names_convert() {
        let error: ClassifierError = "Frozen Pipe".parse::<FaultLabel>().unwrap_err().into();
        assert_eq!(error.to_string(), "unknown fault label: \"Frozen Pipe\"");
    }

    #[test]
    fn boxed_classifiers_are_classifiers() {
        let classifier: Box<dyn Classifier> = Box::new(StubClassifier::new(
            FaultLabel::SensorDrift,
            vec![(FaultLabel::SensorDrift, 0.6)],
        ));
        let verdict = consult(&classifier, &sample_features()).unwrap();
        assert_eq!(verdict.label, FaultLabel::SensorDrift);
    }
}
