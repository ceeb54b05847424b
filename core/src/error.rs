use math::MathError;
use thiserror::Error;

/// Result type specialized for secret sharing operations.
pub type ShamirResult<T> = std::result::Result<T, ShamirError>;

/// Errors that can arise while splitting, merging or recovering a secret.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShamirError {
    #[error(
        "Invalid threshold configuration: threshold {0} must be above 1 and at most the share count {1}"
    )]
    InvalidThreshold(usize, usize),
    #[error("Insufficient shares: need {0}, got {1}")]
    InsufficientShares(usize, usize),
    #[error("Invalid share index: {0}")]
    InvalidIndex(u64),
    #[error("Duplicate share index: {0}")]
    DuplicateIndex(u64),
    #[error("Share modulus mismatch: {0} != {1}")]
    ModulusMismatch(u32, u32),
    #[error("Share threshold mismatch: {0:?} != {1:?}")]
    ThresholdMismatch(Option<usize>, Option<usize>),
    #[error("Malformed shard: {0}")]
    MalformedShard(String),
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
    #[error(transparent)]
    Math(#[from] MathError),
}

impl ShamirError {
    /// True when the failure is an unusable or unknown modulus.
    pub fn is_invalid_modulus(&self) -> bool {
        matches!(self, ShamirError::Math(err) if err.is_invalid_modulus())
    }
}
