use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Used for quantities that appear as divisors, such as molar masses and
/// absolute reference temperatures.
///
/// # Examples
///
/// ```
/// use enthalpy_models::support::constraint::{Constraint, ConstraintError, StrictlyPositive};
///
/// assert!(StrictlyPositive::check(&28.0134).is_ok());
/// assert_eq!(StrictlyPositive::check(&0.0), Err(ConstraintError::Zero));
/// assert_eq!(StrictlyPositive::check(&f64::NAN), Err(ConstraintError::NotANumber));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::MolarMass, molar_mass::gram_per_mole};

    #[test]
    fn floats() {
        assert!(StrictlyPositive::check(&0.022414).is_ok());
        assert_eq!(StrictlyPositive::check(&0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::check(&-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::check(&f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn molar_masses() {
        let molar_mass = MolarMass::new::<gram_per_mole>(28.0134);
        assert!(StrictlyPositive::check(&molar_mass).is_ok());

        let molar_mass = MolarMass::new::<gram_per_mole>(0.0);
        assert!(StrictlyPositive::check(&molar_mass).is_err());
    }
}
