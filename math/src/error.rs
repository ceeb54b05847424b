use num_bigint::BigUint;
use thiserror::Error;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type for prime field arithmetic.
///
/// An unusable modulus is reported by one of three variants:
/// [`InvalidModulus`](MathError::InvalidModulus) for an unregistered label,
/// [`ValueTooLarge`](MathError::ValueTooLarge) when the requested field is
/// too small, and [`NoModulusLargeEnough`](MathError::NoModulusLargeEnough)
/// when no registered field fits. [`MathError::is_invalid_modulus`] matches
/// all of them.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error("invalid modulus: no prime registered for label {label}")]
    InvalidModulus { label: u32 },
    #[error(
        "invalid modulus: {value_bits}-bit value does not fit the field of label {label}"
    )]
    ValueTooLarge { label: u32, value_bits: u64 },
    #[error("invalid modulus: no registered prime exceeds a {value_bits}-bit value")]
    NoModulusLargeEnough { value_bits: u64 },
    #[error("{what} {value} is outside the field of order {bound}")]
    OutOfRangeValue {
        what: &'static str,
        value: BigUint,
        bound: BigUint,
    },
    #[error("coordinate 0 is reserved for the constant term")]
    ReservedCoordinate,
    #[error("{value} has no inverse modulo {modulus}")]
    NonInvertible { value: BigUint, modulus: BigUint },
}

impl MathError {
    /// True for every error that reports an unusable modulus selection.
    pub fn is_invalid_modulus(&self) -> bool {
        matches!(
            self,
            MathError::InvalidModulus { .. }
                | MathError::ValueTooLarge { .. }
                | MathError::NoModulusLargeEnough { .. }
        )
    }

    pub(crate) fn out_of_range(
        what: &'static str,
        value: &BigUint,
        bound: &BigUint,
    ) -> Self {
        MathError::OutOfRangeValue {
            what,
            value: value.clone(),
            bound: bound.clone(),
        }
    }
}
