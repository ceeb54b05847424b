//! Shamir secret sharing of byte strings over the registered prime fields.
//!
//! A secret is framed with [`SENTINEL`](crate::params::SENTINEL), encoded
//! as a big-endian integer and placed as the constant term of a random
//! polynomial of degree `threshold - 1`. Share `i` is the polynomial evaluated at `x = i`.

use std::collections::BTreeMap;

use math::arith::max_value_for_length;
use math::prelude::*;
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::error::{ShamirError, ShamirResult};
use crate::params::{SplitParams, MIN_THRESHOLD};
use crate::share::Share;
use crate::utils::{random_coefficients, strip_sentinel, with_sentinel};

/// The shares of one secret, keyed by index.
///
/// Built either by [`ShamirShareSet::split`] or by merging shares a caller
/// collected, e.g. from parsed shard URIs. Shares are kept ordered by index,
/// and recovery always uses the `threshold` lowest indices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShamirShareSet {
    modulus: u32,
    threshold: Option<usize>,
    shares: BTreeMap<u64, Vec<u8>>,
}

impl ShamirShareSet {
    /// An empty set for the field `modulus`.
    pub fn new(modulus: u32, threshold: Option<usize>) -> Self {
        ShamirShareSet {
            modulus,
            threshold,
            shares: BTreeMap::new(),
        }
    }

    /// Collect `shares` into a new set. See [`ShamirShareSet::insert`].
    pub fn from_shares<I>(
        modulus: u32,
        threshold: Option<usize>,
        shares: I,
    ) -> ShamirResult<Self>
    where
        I: IntoIterator<Item = Share>,
    {
        let mut set = Self::new(modulus, threshold);
        for share in shares {
            set.insert(share)?;
        }
        Ok(set)
    }

    /// Split `secret` into `params.share_count` shares, any
    /// `params.threshold` of which recover it.
    pub fn split(secret: &[u8], params: &SplitParams) -> ShamirResult<Self> {
        let mut rng = rand::rng();
        Self::split_with_rng(&mut rng, secret, params)
    }

    /// [`ShamirShareSet::split`] drawing coefficients from `rng`.
    pub fn split_with_rng<R>(
        rng: &mut R,
        secret: &[u8],
        params: &SplitParams,
    ) -> ShamirResult<Self>
    where
        R: CryptoRng + RngCore + ?Sized,
    {
        params.validate()?;

        let framed = with_sentinel(secret);
        // The field depends only on the secret length, never on its value.
        let worst_case = max_value_for_length(framed.len());
        let field = select_modulus(&worst_case, params.modulus)?;

        let mut coefficients =
            random_coefficients(rng, &field, params.threshold - 1);
        coefficients.push(bytes_to_int(&framed));
        let polynomial = Polynomial::new(field, coefficients)?;
        let modulus = polynomial.field().label();

        let shares = (1..=params.share_count as u64)
            .map(|index| -> ShamirResult<(u64, Vec<u8>)> {
                let y = polynomial.evaluate(&BigUint::from(index))?;
                Ok((index, int_to_bytes(&y)))
            })
            .collect::<ShamirResult<BTreeMap<u64, Vec<u8>>>>()?;

        log::debug!(
            "split {} secret bytes into {}-of-{} shares over modulus {}",
            secret.len(),
            params.threshold,
            params.share_count,
            modulus
        );

        Ok(ShamirShareSet {
            modulus,
            threshold: Some(params.threshold),
            shares,
        })
    }

    /// Reconstruct the secret by Lagrange interpolation at zero.
    ///
    /// When a threshold is recorded exactly that many shares are used, the
    /// ones with the lowest indices. Otherwise every share is used. Shares
    /// from different splits, or too few of them, produce garbage rather than
    /// an error.
    pub fn recover(&self) -> ShamirResult<Vec<u8>> {
        let field = PrimeField::from_label(self.modulus)?;
        let points = self
            .select_active_shares()?
            .map(|share| share.to_point(&field))
            .collect::<ShamirResult<Vec<_>>>()?;

        log::debug!(
            "recovering from shares {:?} over modulus {}",
            points.iter().map(|(x, _)| x.to_string()).collect::<Vec<_>>(),
            self.modulus
        );

        let secret = interpolate_at(&field, &BigUint::zero(), &points)?;
        Ok(strip_sentinel(&int_to_bytes(&secret)))
    }

    fn select_active_shares(
        &self,
    ) -> ShamirResult<impl Iterator<Item = Share> + '_> {
        let required = match self.threshold {
            Some(threshold) if threshold < MIN_THRESHOLD => {
                return Err(ShamirError::InvalidThreshold(
                    threshold,
                    self.shares.len(),
                ));
            }
            Some(threshold) => threshold,
            None => self.shares.len().max(1),
        };

        if self.shares.len() < required {
            return Err(ShamirError::InsufficientShares(
                required,
                self.shares.len(),
            ));
        }

        Ok(self.iter().take(required))
    }

    /// Add a share. An index that is already present is rejected, even when
    /// the value matches.
    pub fn insert(&mut self, share: Share) -> ShamirResult<()> {
        self.check_insert(&share)?;
        self.shares.insert(share.index, share.value);
        Ok(())
    }

    fn check_insert(&self, share: &Share) -> ShamirResult<()> {
        if share.index == 0 {
            return Err(ShamirError::InvalidIndex(share.index));
        }
        if self.shares.contains_key(&share.index) {
            return Err(ShamirError::DuplicateIndex(share.index));
        }
        Ok(())
    }

    /// Fold the shares of `other` into this set.
    ///
    /// Both sets must agree on modulus and threshold. Nothing is merged if
    /// any share conflicts.
    pub fn merge(&mut self, other: ShamirShareSet) -> ShamirResult<()> {
        if self.modulus != other.modulus {
            return Err(ShamirError::ModulusMismatch(
                self.modulus,
                other.modulus,
            ));
        }
        if self.threshold != other.threshold {
            return Err(ShamirError::ThresholdMismatch(
                self.threshold,
                other.threshold,
            ));
        }

        for share in other.iter() {
            self.check_insert(&share)?;
        }
        self.shares.extend(other.shares);
        Ok(())
    }

    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    pub fn threshold(&self) -> Option<usize> {
        self.threshold
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    pub fn get(&self, index: u64) -> Option<&[u8]> {
        self.shares.get(&index).map(Vec::as_slice)
    }

    pub fn indices(&self) -> impl Iterator<Item = u64> + '_ {
        self.shares.keys().copied()
    }

    /// Shares in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = Share> + '_ {
        self.shares.iter().map(|(&index, value)| Share {
            index,
            value: value.clone(),
        })
    }

    /// A new set holding only the shares at `indices`, keeping modulus and
    /// threshold. Unknown indices are skipped.
    pub fn subset(&self, indices: &[u64]) -> Self {
        let shares = indices
            .iter()
            .filter_map(|i| self.shares.get_key_value(i))
            .map(|(&i, v)| (i, v.clone()))
            .collect();
        ShamirShareSet {
            modulus: self.modulus,
            threshold: self.threshold,
            shares,
        }
    }
}

/// Split `secret` into `share_count` shares with the given `threshold`.
pub fn split(
    secret: &[u8],
    threshold: usize,
    share_count: usize,
    modulus: Option<u32>,
) -> ShamirResult<ShamirShareSet> {
    let params = SplitParams {
        threshold,
        share_count,
        modulus,
    };
    ShamirShareSet::split(secret, &params)
}

/// Recover the secret held by `shares`.
pub fn recover(shares: &ShamirShareSet) -> ShamirResult<Vec<u8>> {
    shares.recover()
}
