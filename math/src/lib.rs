//! Prime field arithmetic for threshold secret sharing: minimal big-endian
//! integer encoding, modular inverses, the registry of `2^k + delta` primes
//! and polynomials over those fields.

pub mod arith;
pub mod error;
pub mod modulus;
pub mod poly;
pub mod prelude;

pub use error::{MathError, Result};
pub use modulus::{select_modulus, PrimeField};
pub use poly::{interpolate_at, Polynomial};
