use math::prelude::*;
use rand::{CryptoRng, RngCore};

use crate::params::SENTINEL;

/// Draw a uniformly distributed element of `field`.
///
/// Rejection sampling over the bit length of the prime, so no value is
/// favoured by a modular reduction.
pub fn random_field_element<R>(rng: &mut R, field: &PrimeField) -> BigUint
where
    R: CryptoRng + RngCore + ?Sized,
{
    let prime = field.prime();
    let bits = prime.bits();
    let mut bytes = vec![0u8; byte_length(prime)];
    let excess_bits = bytes.len() as u64 * 8 - bits;

    loop {
        rng.fill_bytes(&mut bytes);
        if let Some(top) = bytes.first_mut() {
            *top &= 0xffu8 >> excess_bits;
        }
        let candidate = bytes_to_int(&bytes);
        if field.contains(&candidate) {
            return candidate;
        }
    }
}

/// `count` independent uniform field elements.
pub fn random_coefficients<R>(
    rng: &mut R,
    field: &PrimeField,
    count: usize,
) -> Vec<BigUint>
where
    R: CryptoRng + RngCore + ?Sized,
{
    std::iter::repeat_with(|| random_field_element(rng, field))
        .take(count)
        .collect()
}

/// Prefix `secret` with [`SENTINEL`].
pub fn with_sentinel(secret: &[u8]) -> Vec<u8> {
    let mut framed = Vec::with_capacity(secret.len() + 1);
    framed.push(SENTINEL);
    framed.extend_from_slice(secret);
    framed
}

/// Drop the leading sentinel byte. The byte is not checked; shares carry no
/// integrity protection.
pub fn strip_sentinel(framed: &[u8]) -> Vec<u8> {
    framed.split_first().map(|(_, rest)| rest.to_vec()).unwrap_or_default()
}
