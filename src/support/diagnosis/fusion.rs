use serde::{Deserialize, Serialize};
use tracing::debug;
use uom::si::{f64::Ratio, ratio::percent};

use crate::support::constraint::{Constrained, ConstraintResult, UnitInterval};

use super::{Confidence, FaultLabel, Verdict};

/// Constants governing how a classifier verdict adjusts the rule verdict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FusionPolicy {
    override_scale: Constrained<f64, UnitInterval>,
    agreement_boost: Constrained<f64, UnitInterval>,
    agreement_cap: Confidence,
}

impl FusionPolicy {
    /// Creates a policy.
    ///
    /// - `override_scale`: factor applied to the classifier confidence when it
    ///   reports a fault that the rules did not find.
    /// - `agreement_boost`: fraction of the classifier confidence added to the
    ///   rule confidence when both name the same fault.
    /// - `agreement_cap`: upper bound on a boosted confidence.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either factor lies outside [0, 1].
    pub fn new(
        override_scale: f64,
        agreement_boost: f64,
        agreement_cap: Confidence,
    ) -> ConstraintResult<Self> {
        Ok(Self {
            override_scale: UnitInterval::new(override_scale)?,
            agreement_boost: UnitInterval::new(agreement_boost)?,
            agreement_cap,
        })
    }

    #[must_use]
    pub fn override_scale(&self) -> f64 {
        self.override_scale.into_inner()
    }

    #[must_use]
    pub fn agreement_boost(&self) -> f64 {
        self.agreement_boost.into_inner()
    }

    #[must_use]
    pub fn agreement_cap(&self) -> Confidence {
        self.agreement_cap
    }
}

impl Default for FusionPolicy {
    /// Scale 0.7, boost 0.1 and a 99 % cap.
    fn default() -> Self {
        Self {
            override_scale: UnitInterval::saturating(0.7),
            agreement_boost: UnitInterval::saturating(0.1),
            agreement_cap: Confidence::saturating(Ratio::new::<percent>(99.0)),
        }
    }
}

/// Which fusion branch produced a [`Diagnosis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FusionOutcome {
    /// No classifier verdict was available.
    RulesOnly,
    /// Both sources reported normal operation.
    BothNormal,
    /// Rules saw nothing, the classifier saw a fault.
    ClassifierOverride,
    /// Both sources named the same fault.
    Agreement,
    /// The sources named different faults and the rules won.
    RulesPrevail,
}

/// The fused result of rule and classifier diagnosis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnosis {
    verdict: Verdict,
    outcome: FusionOutcome,
}

impl Diagnosis {
    #[must_use]
    pub fn label(&self) -> FaultLabel {
        self.verdict.label
    }

    #[must_use]
    pub fn confidence(&self) -> Confidence {
        self.verdict.confidence
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    #[must_use]
    pub fn outcome(&self) -> FusionOutcome {
        self.outcome
    }

    /// Maintenance advice for the diagnosed condition.
    #[must_use]
    pub fn advisory(&self) -> &'static str {
        self.verdict.label.advisory()
    }
}

/// Combines a rule verdict with an optional classifier verdict.
///
/// Physical rules take precedence:
///
/// - Without a classifier verdict, the rule verdict stands.
/// - If the rules report normal operation and the classifier reports a
///   fault, the classifier label is used with its confidence scaled down.
/// - If both name the same fault, the rule confidence is boosted by a
///   fraction of the classifier confidence, up to a cap.
/// - Otherwise the rule verdict stands.
#[must_use]
pub fn fuse(rule: Verdict, classifier: Option<Verdict>, policy: &FusionPolicy) -> Diagnosis {
    let (verdict, outcome) = match classifier {
        None => (rule, FusionOutcome::RulesOnly),
        Some(ml) => match (rule.label.is_normal(), ml.label.is_normal()) {
            (true, true) => (rule, FusionOutcome::BothNormal),
            (true, false) => {
                let scaled: Ratio = *ml.confidence * policy.override_scale();
                (
                    Verdict {
                        label: ml.label,
                        confidence: Confidence::saturating(scaled),
                    },
                    FusionOutcome::ClassifierOverride,
                )
            }
            (false, _) if ml.label == rule.label => {
                let boosted: Ratio = *rule.confidence + *ml.confidence * policy.agreement_boost();
                let capped = if boosted > *policy.agreement_cap() {
                    *policy.agreement_cap()
                } else {
                    boosted
                };
                (
                    Verdict {
                        label: rule.label,
                        confidence: Confidence::saturating(capped),
                    },
                    FusionOutcome::Agreement,
                )
            }
            (false, _) => (rule, FusionOutcome::RulesPrevail),
        },
    };

    debug!(
        ?outcome,
        label = %verdict.label,
        confidence = verdict.confidence.percent(),
        "fused diagnosis"
    );

    Diagnosis { verdict, outcome }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn verdict(label: FaultLabel, confidence: f64) -> Verdict {
        Verdict::new(label, confidence)
    }

    fn fuse_default(rule: Verdict, ml: Option<Verdict>) -> Diagnosis {
        fuse(rule, ml, &FusionPolicy::default())
    }

    #[test]
    fn rules_only() {
        let diagnosis = fuse_default(verdict(FaultLabel::HeatLeakage, 85.0), None);

        assert_eq!(diagnosis.label(), FaultLabel::HeatLeakage);
        assert_relative_eq!(diagnosis.confidence().percent(), 85.0, epsilon = 1e-9);
        assert_eq!(diagnosis.outcome(), FusionOutcome::RulesOnly);
    }

    #[test]
    fn agreement_boosts_confidence() {
        let diagnosis = fuse_default(
            verdict(FaultLabel::HeatLeakage, 85.0),
            Some(verdict(FaultLabel::HeatLeakage, 90.0)),
        );

        assert_eq!(diagnosis.label(), FaultLabel::HeatLeakage);
        assert_relative_eq!(diagnosis.confidence().percent(), 94.0, epsilon = 1e-9);
        assert_eq!(diagnosis.outcome(), FusionOutcome::Agreement);
    }

    #[test]
    fn agreement_is_capped() {
        let diagnosis = fuse_default(
            verdict(FaultLabel::PumpDegradation, 95.0),
            Some(verdict(FaultLabel::PumpDegradation, 99.0)),
        );
        assert_relative_eq!(diagnosis.confidence().percent(), 99.0, epsilon = 1e-9);
    }

    #[test]
    fn classifier_overrides_normal_cautiously() {
        let diagnosis = fuse_default(
            verdict(FaultLabel::NormalCondition, 100.0),
            Some(verdict(FaultLabel::DustAccumulation, 80.0)),
        );

        assert_eq!(diagnosis.label(), FaultLabel::DustAccumulation);
        assert_relative_eq!(diagnosis.confidence().percent(), 56.0, epsilon = 1e-9);
        assert_eq!(diagnosis.outcome(), FusionOutcome::ClassifierOverride);
    }

    #[test]
    fn rules_win_disagreement() {
        let diagnosis = fuse_default(
            verdict(FaultLabel::SensorDrift, 92.0),
            Some(verdict(FaultLabel::DustAccumulation, 97.0)),
        );

        assert_eq!(diagnosis.label(), FaultLabel::SensorDrift);
        assert_relative_eq!(diagnosis.confidence().percent(), 92.0, epsilon = 1e-9);
        assert_eq!(diagnosis.outcome(), FusionOutcome::RulesPrevail);
    }

    #[test]
    fn classifier_normal_does_not_clear_rule_fault() {
        let diagnosis = fuse_default(
            verdict(FaultLabel::DustAccumulation, 88.0),
            Some(verdict(FaultLabel::NormalCondition, 99.0)),
        );

        assert_eq!(diagnosis.label(), FaultLabel::DustAccumulation);
        assert_eq!(diagnosis.outcome(), FusionOutcome::RulesPrevail);
    }

    #[test]
    fn both_normal() {
        let diagnosis = fuse_default(
            verdict(FaultLabel::NormalCondition, 100.0),
            Some(verdict(FaultLabel::NormalCondition, 60.0)),
        );

        assert_eq!(diagnosis.label(), FaultLabel::NormalCondition);
        assert_relative_eq!(diagnosis.confidence().percent(), 100.0);
        assert_eq!(diagnosis.outcome(), FusionOutcome::BothNormal);
        assert_eq!(diagnosis.advisory(), "System is healthy. No action required.");
    }

    #[test]
    fn custom_policy() {
        let policy = FusionPolicy::new(0.5, 0.2, Confidence::from_percent(95.0).unwrap()).unwrap();

        let diagnosis = fuse(
            verdict(FaultLabel::NormalCondition, 100.0),
            Some(verdict(FaultLabel::HeatLeakage, 80.0)),
            &policy,
        );
        assert_relative_eq!(diagnosis.confidence().percent(), 40.0, epsilon = 1e-9);

        let diagnosis = fuse(
            verdict(FaultLabel::HeatLeakage, 85.0),
            Some(verdict(FaultLabel::HeatLeakage, 90.0)),
            &policy,
        );
        assert_relative_eq!(diagnosis.confidence().percent(), 95.0, epsilon = 1e-9);
    }

    #[test]
    fn policy_factors_are_validated() {
        let cap = Confidence::from_percent(99.0).unwrap();
        assert!(FusionPolicy::new(1.2, 0.1, cap).is_err());
        assert!(FusionPolicy::new(0.7, -0.1, cap).is_err());
        assert!(FusionPolicy::new(0.7, f64::NAN, cap).is_err());
    }
}
