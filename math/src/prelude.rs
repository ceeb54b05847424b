pub use num_bigint::BigUint;

pub use crate::{
    arith::{byte_length, bytes_to_int, int_to_bytes, modular_inverse},
    error::MathError,
    modulus::{select_modulus, PrimeField},
    poly::{interpolate_at, Polynomial},
};
