use std::convert::Infallible;

use serde::{Deserialize, Serialize};
use tracing::warn;
use twine_core::Model;

use crate::support::{
    collector::CollectorParameters,
    diagnosis::{
        Classifier, Diagnosis, FaultLabel, FeatureVector, FusionPolicy, NoClassifier,
        RuleDiagnoser, consult, fuse,
    },
    units::round_to,
};

/// Diagnoses collector faults from measured features.
///
/// The rule verdict is always computed. When a classifier is present and
/// answers, its verdict refines the rule verdict according to the
/// [`FusionPolicy`]. A failing classifier is logged and ignored.
#[derive(Debug, Clone)]
pub struct FaultDetector<C> {
    rules: RuleDiagnoser,
    classifier: Option<C>,
    policy: FusionPolicy,
}

impl FaultDetector<NoClassifier> {
    /// Creates a detector that uses the diagnostic rules alone.
    #[must_use]
    pub fn rules_only() -> Self {
        Self {
            rules: RuleDiagnoser::default(),
            classifier: None,
            policy: FusionPolicy::default(),
        }
    }
}

impl Default for FaultDetector<NoClassifier> {
    fn default() -> Self {
        Self::rules_only()
    }
}

impl<C: Classifier> FaultDetector<C> {
    /// Creates a detector that refines rule verdicts with `classifier`.
    #[must_use]
    pub fn with_classifier(classifier: C) -> Self {
        Self {
            rules: RuleDiagnoser::default(),
            classifier: Some(classifier),
            policy: FusionPolicy::default(),
        }
    }

    /// Derives rule inputs for a collector with the given parameters.
    #[must_use]
    pub fn for_collector(self, parameters: &CollectorParameters) -> Self {
        Self {
            rules: RuleDiagnoser::for_collector(parameters),
            ..self
        }
    }

    #[must_use]
    pub fn with_policy(self, policy: FusionPolicy) -> Self {
        Self { policy, ..self }
    }

    #[must_use]
    pub fn rules(&self) -> &RuleDiagnoser {
        &self.rules
    }

    #[must_use]
    pub fn policy(&self) -> &FusionPolicy {
        &self.policy
    }

    /// Diagnoses one operating point.
    #[must_use]
    pub fn diagnose(&self, features: &FeatureVector) -> Diagnosis {
        let rule_verdict = self.rules.diagnose(features);

        let classifier_verdict = self.classifier.as_ref().and_then(|classifier| {
            match consult(classifier, features) {
                Ok(verdict) => Some(verdict),
                Err(error) => {
                    warn!(%error, "classifier inference failed, using rule verdict");
                    None
                }
            }
        });

        fuse(rule_verdict, classifier_verdict, &self.policy)
    }
}

impl<C: Classifier> Model for FaultDetector<C> {
    type Input = FeatureVector;
    type Output = Diagnosis;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.diagnose(input))
    }
}

/// Diagnosis as presented to operators, with confidence rounded to two
/// decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisReport {
    pub predicted_fault: FaultLabel,
    pub confidence_score: f64,
    pub suggestion: String,
}

impl From<&Diagnosis> for DiagnosisReport {
    fn from(diagnosis: &Diagnosis) -> Self {
        Self {
            predicted_fault: diagnosis.label(),
            confidence_score: round_to(diagnosis.confidence().percent(), 2),
            suggestion: diagnosis.advisory().to_owned(),
        }
    }
}
