//! Polynomials over the registered prime fields.
//!
//! Coefficients are stored highest degree first, so the constant term is the
//! last element. This matches the order in which Horner's rule consumes them.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::arith::modular_inverse;
use crate::error::{MathError, Result};
use crate::modulus::PrimeField;

/// A polynomial `a_k x^k + ... + a_1 x + a_0` over a [`PrimeField`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial {
    field: PrimeField,
    coefficients: Vec<BigUint>,
}

impl Polynomial {
    /// Build a polynomial from `[a_k, ..., a_1, a_0]`.
    ///
    /// Every coefficient must already be reduced into `[0, prime)`.
    pub fn new(field: PrimeField, coefficients: Vec<BigUint>) -> Result<Self> {
        let count = BigUint::from(coefficients.len());
        field.check_element("coefficient count", &count)?;

        for coefficient in &coefficients {
            field.check_element("coefficient", coefficient)?;
        }

        Ok(Self {
            field,
            coefficients,
        })
    }

    /// Same as [`Polynomial::new`] with the field looked up by label.
    pub fn from_label(label: u32, coefficients: Vec<BigUint>) -> Result<Self> {
        Self::new(PrimeField::from_label(label)?, coefficients)
    }

    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    pub fn coefficients(&self) -> &[BigUint] {
        &self.coefficients
    }

    /// The constant term `a_0`, or `None` for the empty polynomial.
    pub fn constant_term(&self) -> Option<&BigUint> {
        self.coefficients.last()
    }

    /// Formal degree, i.e. `len - 1`. Leading zeros are not stripped.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    /// Evaluate at `x` with Horner's rule.
    ///
    /// `x` must lie in `[1, prime)`. Zero is the coordinate of the constant
    /// term and is never a valid share coordinate.
    pub fn evaluate(&self, x: &BigUint) -> Result<BigUint> {
        if x.is_zero() {
            return Err(MathError::ReservedCoordinate);
        }
        let prime = self.field.prime();
        self.field.check_element("coordinate", x)?;

        let y = self
            .coefficients
            .iter()
            .fold(BigUint::zero(), |acc, c| (acc * x + c) % prime);
        Ok(y)
    }
}

/// Lagrange interpolation of the polynomial through `points`, evaluated at
/// `x`, over `field`.
///
/// All coordinates and values must be field elements. Two points sharing an
/// x coordinate make a denominator vanish and fail with
/// [`MathError::NonInvertible`].
pub fn interpolate_at(
    field: &PrimeField,
    x: &BigUint,
    points: &[(BigUint, BigUint)],
) -> Result<BigUint> {
    let prime = field.prime();
    field.check_element("coordinate", x)?;
    for (xi, yi) in points {
        field.check_element("coordinate", xi)?;
        field.check_element("value", yi)?;
    }

    let mut y = BigUint::zero();
    for (i, (xi, yi)) in points.iter().enumerate() {
        let mut numerator = yi.clone();
        let mut denominator = BigUint::one();

        for (j, (xj, _)) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator = numerator * sub_mod(x, xj, prime) % prime;
            denominator = denominator * sub_mod(xi, xj, prime) % prime;
        }

        let inverse = modular_inverse(&denominator, prime)?;
        y = (y + numerator * inverse) % prime;
    }

    Ok(y)
}

/// `(a - b) mod prime` for canonical `a` and `b`.
#[inline]
fn sub_mod(a: &BigUint, b: &BigUint, prime: &BigUint) -> BigUint {
    (a + prime - b) % prime
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::collection::vec;
    use proptest::prelude::*;
    use test_strategy::proptest;

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    fn f17() -> PrimeField {
        PrimeField::from_label(17).unwrap()
    }

    #[test]
    fn test_polynomial_creation() {
        let p = Polynomial::new(f17(), vec![big(1), big(2), big(3)]).unwrap();
        assert_eq!(p.coefficients(), &[big(1), big(2), big(3)]);
        assert_eq!(p.constant_term(), Some(&big(3)));
        assert_eq!(p.degree(), Some(2));
        assert_eq!(p.field().label(), 17);
    }

    #[test]
    fn test_out_of_range_coefficient() {
        let err =
            Polynomial::new(f17(), vec![big(1), big(131071)]).unwrap_err();
        assert!(matches!(
            err,
            MathError::OutOfRangeValue {
                what: "coefficient",
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(
            Polynomial::from_label(16, vec![big(1)]).unwrap_err(),
            MathError::InvalidModulus { label: 16 }
        );
    }

    #[test]
    fn test_horner_evaluation() {
        // 2x^2 + 3x + 5
        let p = Polynomial::new(f17(), vec![big(2), big(3), big(5)]).unwrap();
        assert_eq!(p.evaluate(&big(1)).unwrap(), big(10));
        assert_eq!(p.evaluate(&big(2)).unwrap(), big(19));
        assert_eq!(p.evaluate(&big(10)).unwrap(), big(235));

        // wraps around 2^17 - 1
        let x = big(131070);
        let expected = (big(2) * &x * &x + big(3) * &x + big(5)) % big(131071);
        assert_eq!(p.evaluate(&x).unwrap(), expected);
    }

    #[test]
    fn test_evaluate_rejects_zero_and_out_of_field() {
        let p = Polynomial::new(f17(), vec![big(7), big(5)]).unwrap();
        assert_eq!(
            p.evaluate(&BigUint::zero()).unwrap_err(),
            MathError::ReservedCoordinate
        );
        assert_eq!(
            MathError::ReservedCoordinate.to_string(),
            "coordinate 0 is reserved for the constant term"
        );
        assert!(matches!(
            p.evaluate(&big(131071)),
            Err(MathError::OutOfRangeValue { .. })
        ));
    }

    #[test]
    fn test_empty_polynomial_evaluates_to_zero() {
        let p = Polynomial::new(f17(), Vec::new()).unwrap();
        assert_eq!(p.degree(), None);
        assert_eq!(p.evaluate(&big(4)).unwrap(), BigUint::zero());
    }

    #[test]
    fn test_lagrange_interpolation() {
        // For points (1,2), (2,3), (3,4), the polynomial is y = x + 1
        let points = vec![(big(1), big(2)), (big(2), big(3)), (big(3), big(4))];
        let y = interpolate_at(&f17(), &BigUint::zero(), &points).unwrap();
        assert_eq!(y, big(1));
        let y = interpolate_at(&f17(), &big(10), &points).unwrap();
        assert_eq!(y, big(11));
    }

    #[test]
    fn test_interpolation_rejects_duplicate_coordinates() {
        let points = vec![(big(1), big(2)), (big(1), big(3))];
        assert!(matches!(
            interpolate_at(&f17(), &BigUint::zero(), &points),
            Err(MathError::NonInvertible { .. })
        ));
    }

    #[test]
    fn test_interpolation_rejects_out_of_field_points() {
        let points = vec![(big(1), big(131071)), (big(2), big(3))];
        assert!(matches!(
            interpolate_at(&f17(), &BigUint::zero(), &points),
            Err(MathError::OutOfRangeValue { what: "value", .. })
        ));
    }

    #[proptest]
    fn interpolation_recovers_constant_term(
        #[strategy(vec(0u64..131071, 1..8))] coefficients: Vec<u64>,
    ) {
        let coefficients: Vec<BigUint> =
            coefficients.into_iter().map(BigUint::from).collect();
        let p = Polynomial::new(f17(), coefficients.clone()).unwrap();

        let points: Vec<(BigUint, BigUint)> = (1..=coefficients.len() as u64)
            .map(|x| {
                let x = big(x * 7);
                let y = p.evaluate(&x).unwrap();
                (x, y)
            })
            .collect();

        let secret = interpolate_at(p.field(), &BigUint::zero(), &points).unwrap();
        prop_assert_eq!(Some(&secret), p.constant_term());
    }
}
