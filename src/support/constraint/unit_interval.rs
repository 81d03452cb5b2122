use std::cmp::Ordering;

use uom::si::{f64::Ratio, ratio::ratio};

use super::{Constrained, Constraint, ConstraintError};

/// Supplies 0 and 1 for types used in the closed unit interval [0, 1].
///
/// Implementations should ensure that `zero() ≤ one()`.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }
    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}

/// Marker type enforcing that a value lies in the closed unit interval: `0 ≤ x ≤ 1`.
///
/// Efficiencies and confidence scores are stored as [`Ratio`] values in this
/// interval and reported in percent.
///
/// # Examples
///
/// ```
/// use twine_solar_thermal::support::constraint::UnitInterval;
/// use uom::si::{f64::Ratio, ratio::percent};
///
/// let eta = UnitInterval::new(Ratio::new::<percent>(71.1)).unwrap();
/// assert!((eta.into_inner().get::<percent>() - 71.1).abs() < 1e-12);
///
/// // Measured efficiency above 100 % is capped.
/// let eta = UnitInterval::saturating(Ratio::new::<percent>(137.0));
/// assert_eq!(eta.into_inner().get::<percent>(), 100.0);
///
/// assert!(UnitInterval::new(Ratio::new::<percent>(-1.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs `Constrained<T, UnitInterval>` if 0 ≤ value ≤ 1.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, UnitInterval>, ConstraintError> {
        Constrained::<T, UnitInterval>::new(value)
    }

    /// Returns the lower bound (zero) as a constrained value.
    #[must_use]
    pub fn zero<T: UnitBounds>() -> Constrained<T, UnitInterval> {
        Constrained::trusted(T::zero())
    }

    /// Returns the upper bound (one) as a constrained value.
    #[must_use]
    pub fn one<T: UnitBounds>() -> Constrained<T, UnitInterval> {
        Constrained::trusted(T::one())
    }

    /// Clamps a value into `[0, 1]`.
    ///
    /// `NaN` maps to zero.
    #[must_use]
    pub fn saturating<T: UnitBounds>(value: T) -> Constrained<T, UnitInterval> {
        match <Self as Constraint<T>>::check(&value) {
            Ok(()) => Constrained::trusted(value),
            Err(ConstraintError::AboveMaximum) => Self::one(),
            Err(_) => Self::zero(),
        }
    }
}

impl<T: UnitBounds> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
