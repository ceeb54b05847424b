//! Big-integer helpers shared by the field code: minimal big-endian byte
//! encoding and the modular inverse.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};

use crate::error::{MathError, Result};

/// Number of bytes needed to hold `bits` bits.
#[inline]
pub fn byte_length_from_bits(bits: u64) -> usize {
    bits.div_ceil(8) as usize
}

/// Smallest number of bytes that can hold `value`. Zero needs no bytes.
#[inline]
pub fn byte_length(value: &BigUint) -> usize {
    byte_length_from_bits(value.bits())
}

/// Minimal-length big-endian encoding of `value`.
///
/// The encoding is never padded, so `int_to_bytes(0)` is empty and
/// `int_to_bytes(v).len() == byte_length(v)` for every `v`.
pub fn int_to_bytes(value: &BigUint) -> Vec<u8> {
    if value.is_zero() {
        return Vec::new();
    }
    value.to_bytes_be()
}

/// Big-endian unsigned decoding. Leading zero bytes carry no value.
pub fn bytes_to_int(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// The largest integer representable in `length` bytes, i.e. all bytes 0xFF.
pub fn max_value_for_length(length: usize) -> BigUint {
    (BigUint::one() << (length * 8)) - BigUint::one()
}

/// Compute `x` in `[0, modulus)` with `a * x ≡ 1 (mod modulus)` using the
/// extended Euclidean algorithm.
///
/// # Errors
///
/// [`MathError::NonInvertible`] when `modulus <= 1`, when `a` is not in
/// `[0, modulus)` or when `gcd(a, modulus) != 1` (which includes `a == 0`).
pub fn modular_inverse(a: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    let non_invertible = || MathError::NonInvertible {
        value: a.clone(),
        modulus: modulus.clone(),
    };

    if modulus <= &BigUint::one() || a >= modulus {
        return Err(non_invertible());
    }

    let m = BigInt::from(modulus.clone());
    let (mut old_r, mut r) = (BigInt::from(a.clone()), m.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_s = &old_s - &q * &s;
        old_s = std::mem::replace(&mut s, next_s);
    }

    // old_r is gcd(a, modulus)
    if !old_r.is_one() {
        return Err(non_invertible());
    }

    if old_s.is_negative() {
        old_s += &m;
    }
    Ok(old_s.magnitude().clone())
}
