//! Threshold secret sharing of byte strings.
//!
//! [`ShamirShareSet::split`] turns a secret into `n` shares of which any `k`
//! recover it with [`ShamirShareSet::recover`]. Shares can be rendered to and
//! parsed from `protoseed:` shard URIs with the [`uri`] module.

pub mod error;
pub mod params;
pub mod shamir;
pub mod share;
pub mod uri;
pub mod utils;

pub use error::{ShamirError, ShamirResult};
pub use params::SplitParams;
pub use shamir::{recover, split, ShamirShareSet};
pub use share::Share;
