use math::prelude::*;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::error::{ShamirError, ShamirResult};

/// A single point `(index, value)` on the sharing polynomial.
///
/// The value is the minimal big-endian encoding of a field element.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Share {
    pub index: u64,
    pub value: Vec<u8>,
}

impl Share {
    pub fn new(index: u64, value: Vec<u8>) -> ShamirResult<Self> {
        if index == 0 {
            return Err(ShamirError::InvalidIndex(index));
        }

        Ok(Share { index, value })
    }

    /// Decode into an interpolation point, checking both coordinates belong
    /// to `field`. Index zero is the secret's coordinate and never a share.
    pub fn to_point(
        &self,
        field: &PrimeField,
    ) -> ShamirResult<(BigUint, BigUint)> {
        if self.index == 0 {
            return Err(ShamirError::InvalidIndex(self.index));
        }
        let x = BigUint::from(self.index);
        let y = bytes_to_int(&self.value);
        field.check_element("share index", &x)?;
        field.check_element("share value", &y)?;
        Ok((x, y))
    }
}
