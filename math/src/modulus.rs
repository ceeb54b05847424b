//! Registry of the prime fields shares may live in.
//!
//! Every field is identified by a bit-length label; its prime is
//! `2^label + delta`. The label travels with each share, so this table must
//! stay identical for every build that splits or recovers.

use std::fmt;

use num_bigint::{BigInt, BigUint};
use num_traits::One;
use phf::phf_ordered_map;

use crate::error::{MathError, Result};

/// Label to delta, ascending by label. Mersenne primes have delta `-1`.
pub const POW2_PRIMES: phf::OrderedMap<u32, i32> = phf_ordered_map! {
    17u32 => -1,
    19u32 => -1,
    31u32 => -1,
    61u32 => -1,
    89u32 => -1,
    107u32 => -1,
    127u32 => -1,
    128u32 => 51,
    192u32 => 133,
    256u32 => 297,
    320u32 => 27,
    384u32 => 231,
    448u32 => 211,
    512u32 => 75,
    521u32 => -1,
    607u32 => -1,
    768u32 => 183,
    1024u32 => 643,
    1279u32 => -1,
    1536u32 => 75,
    2048u32 => 981,
    2203u32 => -1,
    2281u32 => -1,
    3072u32 => 813,
    3217u32 => -1,
    4096u32 => 1761,
    4253u32 => -1,
    4423u32 => -1,
    9689u32 => -1,
    9941u32 => -1,
    11213u32 => -1,
    19937u32 => -1,
    21701u32 => -1,
    23209u32 => -1,
    44497u32 => -1,
    86243u32 => -1,
    110503u32 => -1,
    132049u32 => -1,
    216091u32 => -1,
};

/// A registered prime field `GF(2^label + delta)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrimeField {
    label: u32,
    delta: i32,
    prime: BigUint,
}

impl PrimeField {
    /// Look up the field registered under `label`.
    pub fn from_label(label: u32) -> Result<Self> {
        let delta = *POW2_PRIMES
            .get(&label)
            .ok_or(MathError::InvalidModulus { label })?;

        Ok(Self {
            label,
            delta,
            prime: pow2_plus(label, delta),
        })
    }

    #[inline]
    pub fn label(&self) -> u32 {
        self.label
    }

    #[inline]
    pub fn delta(&self) -> i32 {
        self.delta
    }

    /// The field order.
    #[inline]
    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    /// True iff `value` is a canonical element, i.e. lies in `[0, prime)`.
    #[inline]
    pub fn contains(&self, value: &BigUint) -> bool {
        value < &self.prime
    }

    /// Fail with [`MathError::OutOfRangeValue`] unless `value` is canonical.
    pub fn check_element(&self, what: &'static str, value: &BigUint) -> Result<()> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(MathError::out_of_range(what, value, &self.prime))
        }
    }
}

impl fmt::Display for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF(2^{} {:+})", self.label, self.delta)
    }
}

fn pow2_plus(label: u32, delta: i32) -> BigUint {
    let prime = BigInt::from(BigUint::one() << label) + delta;
    prime.magnitude().clone()
}

/// All registered labels, ascending.
pub fn labels() -> impl Iterator<Item = u32> {
    POW2_PRIMES.keys().copied()
}

/// Pick the field that `value` must fit into.
///
/// With a requested label the field must exist and `value` must be below its
/// prime. Without one the smallest registered field whose prime exceeds
/// `value` is returned.
pub fn select_modulus(
    value: &BigUint,
    requested: Option<u32>,
) -> Result<PrimeField> {
    match requested {
        Some(label) => {
            let field = PrimeField::from_label(label)?;
            if !field.contains(value) {
                return Err(MathError::ValueTooLarge {
                    label,
                    value_bits: value.bits(),
                });
            }
            Ok(field)
        }
        None => {
            // A prime 2^label + delta with |delta| < 2^label can only exceed
            // values of at most label + 1 bits.
            let value_bits = value.bits();
            for (&label, &delta) in POW2_PRIMES.entries() {
                if u64::from(label) + 1 < value_bits {
                    continue;
                }
                let prime = pow2_plus(label, delta);
                if value < &prime {
                    log::trace!("selected modulus label {label} for {value_bits}-bit value");
                    return Ok(PrimeField {
                        label,
                        delta,
                        prime,
                    });
                }
            }
            Err(MathError::NoModulusLargeEnough { value_bits })
        }
    }
}
