use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// # Examples
///
/// ```
/// use twine_solar_thermal::support::constraint::NonNegative;
/// use uom::si::{f64::Power, power::watt};
///
/// let gain = NonNegative::new(Power::new::<watt>(1137.7)).unwrap();
/// assert_eq!(gain.into_inner().get::<watt>(), 1137.7);
///
/// // A temperature drop would mean negative gain; saturate it to zero.
/// let gain = NonNegative::saturating(Power::new::<watt>(-42.0));
/// assert_eq!(gain.into_inner().get::<watt>(), 0.0);
///
/// assert!(NonNegative::new(Power::new::<watt>(-1.0)).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }

    /// Returns zero as a non-negative constrained value.
    #[must_use]
    pub fn zero<T: PartialOrd + Zero>() -> Constrained<T, NonNegative> {
        Constrained::trusted(T::zero())
    }

    /// Clamps a value to be non-negative.
    ///
    /// Negative values and `NaN` become zero.
    #[must_use]
    pub fn saturating<T: PartialOrd + Zero>(value: T) -> Constrained<T, NonNegative> {
        if value >= T::zero() {
            Constrained::trusted(value)
        } else {
            Self::zero()
        }
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Power, power::watt};

    #[test]
    fn floats() {
        assert!(Constrained::<f64, NonNegative>::new(2.0).is_ok());
        assert!(NonNegative::new(0.0).is_ok());
        assert_eq!(NonNegative::new(-2.0), Err(ConstraintError::Negative));
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn saturating_clamps_negative_and_nan_to_zero() {
        assert_relative_eq!(NonNegative::saturating(3.5).into_inner(), 3.5);
        assert_relative_eq!(NonNegative::saturating(-3.5).into_inner(), 0.0);
        assert_relative_eq!(NonNegative::saturating(f64::NAN).into_inner(), 0.0);
    }

    #[test]
    fn heat_rates() {
        let loss = NonNegative::saturating(Power::new::<watt>(-462.0));
        assert_relative_eq!(loss.into_inner().get::<watt>(), 0.0);

        let loss = NonNegative::saturating(Power::new::<watt>(462.0));
        assert_relative_eq!(loss.as_ref().get::<watt>(), 462.0);

        assert!(NonNegative::new(Power::new::<watt>(-0.5)).is_err());
    }
}
