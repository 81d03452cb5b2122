use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, UnitInterval};
use uom::si::{f64::Ratio, ratio::percent};

use super::FaultLabel;

/// How strongly a diagnosis is believed, within [0, 100] %.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Confidence(Constrained<Ratio, UnitInterval>);

impl Confidence {
    /// Create a [`Confidence`] from a percentage.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside [0, 100].
    pub fn from_percent(value: f64) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(Ratio::new::<percent>(value))?))
    }

    /// Create a [`Confidence`] from a ratio, clamping it into [0, 1].
    #[must_use]
    pub fn saturating(value: Ratio) -> Self {
        Self(UnitInterval::saturating(value))
    }

    /// Returns the confidence in percent.
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.0.as_ref().get::<percent>()
    }
}

impl Deref for Confidence {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// A fault label with the confidence assigned to it by one diagnostic source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub label: FaultLabel,
    pub confidence: Confidence,
}

impl Verdict {
    /// Pairs a label with a confidence given in percent, clamped to [0, 100].
    #[must_use]
    pub fn new(label: FaultLabel, confidence_percent: f64) -> Self {
        Self {
            label,
            confidence: Confidence::saturating(Ratio::new::<percent>(confidence_percent)),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn percent_round_trip() -> ConstraintResult<()> {
        let confidence = Confidence::from_percent(88.0)?;
        assert_relative_eq!(confidence.percent(), 88.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn out_of_range_percent_is_rejected() {
        assert!(Confidence::from_percent(100.5).is_err());
        assert!(Confidence::from_percent(-0.5).is_err());
    }

    #[test]
    fn verdict_clamps() {
        let verdict = Verdict::new(FaultLabel::SensorDrift, 140.0);
        assert_relative_eq!(verdict.confidence.percent(), 100.0);
    }
}
