use serde::{Deserialize, Serialize};

use crate::error::{ShamirError, ShamirResult};

/// Byte prepended to every secret before it is encoded as an integer.
///
/// Keeps leading zero bytes of the secret from vanishing in the big-endian
/// encoding and makes the empty secret a non-zero field element.
pub const SENTINEL: u8 = 42;

/// Scheme prefix of shard and payload URIs.
pub const SCHEME: &str = "protoseed:";

pub const MIN_THRESHOLD: usize = 2;
pub const DEFAULT_THRESHOLD: usize = 2;
pub const DEFAULT_SHARE_COUNT: usize = 3;

/// Parameters of a single split call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitParams {
    pub threshold: usize,
    pub share_count: usize,
    /// Field label to use; the smallest fitting field when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modulus: Option<u32>,
}

impl Default for SplitParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            share_count: DEFAULT_SHARE_COUNT,
            modulus: None,
        }
    }
}

impl SplitParams {
    pub fn new(threshold: usize, share_count: usize) -> ShamirResult<Self> {
        let params = Self {
            threshold,
            share_count,
            modulus: None,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn with_modulus(mut self, label: u32) -> Self {
        self.modulus = Some(label);
        self
    }

    pub fn validate(&self) -> ShamirResult<()> {
        if !validate_threshold_config(self.threshold, self.share_count) {
            return Err(ShamirError::InvalidThreshold(
                self.threshold,
                self.share_count,
            ));
        }
        Ok(())
    }
}

/// `1 < threshold <= share_count`.
pub fn validate_threshold_config(threshold: usize, share_count: usize) -> bool {
    (MIN_THRESHOLD..=share_count).contains(&threshold)
}
