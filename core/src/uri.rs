//! Text form of shards and payloads.
//!
//! ```text
//! protoseed:/s/<index>/<threshold>/<modulus>/<base58(share bytes)>
//! protoseed:/p/<base58(secret bytes)>
//! ```
//!
//! A threshold of `0` marks a share set that does not track its threshold.

use crate::error::{ShamirError, ShamirResult};
use crate::params::{MIN_THRESHOLD, SCHEME};
use crate::shamir::ShamirShareSet;
use crate::share::Share;

const SHARE_TAG: &str = "/s/";
const PAYLOAD_TAG: &str = "/p/";

fn b58(bytes: &[u8]) -> String {
    bs58::encode(bytes)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_string()
}

fn un58(text: &str) -> Result<Vec<u8>, bs58::decode::Error> {
    bs58::decode(text)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
}

/// Render one share as a shard URI.
pub fn encode_share(
    index: u64,
    threshold: Option<usize>,
    modulus: u32,
    value: &[u8],
) -> String {
    format!(
        "{SCHEME}{SHARE_TAG}{index}/{}/{modulus}/{}",
        threshold.unwrap_or(0),
        b58(value)
    )
}

/// Parse a shard URI into a set holding that single share.
pub fn parse_share(uri: &str) -> ShamirResult<ShamirShareSet> {
    let malformed = |reason: &str| {
        ShamirError::MalformedShard(format!("{reason}: {uri:?}"))
    };

    let body = uri
        .trim()
        .strip_prefix(SCHEME)
        .and_then(|rest| rest.strip_prefix(SHARE_TAG))
        .ok_or_else(|| malformed("missing shard prefix"))?;

    let fields: Vec<&str> = body.split('/').collect();
    let [index, threshold, modulus, value] = fields[..] else {
        return Err(malformed("expected four fields"));
    };

    let index: u64 = index.parse().map_err(|_| malformed("bad index"))?;
    let threshold: usize =
        threshold.parse().map_err(|_| malformed("bad threshold"))?;
    let modulus: u32 = modulus.parse().map_err(|_| malformed("bad modulus"))?;
    let value = un58(value).map_err(|_| malformed("bad base58 value"))?;

    let threshold = match threshold {
        0 => None,
        k if k < MIN_THRESHOLD => return Err(malformed("bad threshold")),
        k => Some(k),
    };

    ShamirShareSet::from_shares(modulus, threshold, [Share::new(index, value)?])
}

/// Render a secret as a payload URI.
pub fn encode_payload(secret: &[u8]) -> String {
    format!("{SCHEME}{PAYLOAD_TAG}{}", b58(secret))
}

/// Parse a payload URI back into the secret bytes.
pub fn parse_payload(uri: &str) -> ShamirResult<Vec<u8>> {
    let encoded = uri
        .trim()
        .strip_prefix(SCHEME)
        .and_then(|rest| rest.strip_prefix(PAYLOAD_TAG))
        .ok_or_else(|| {
            ShamirError::MalformedPayload(format!(
                "missing payload prefix: {uri:?}"
            ))
        })?;

    un58(encoded).map_err(|err| {
        ShamirError::MalformedPayload(format!("{err}: {uri:?}"))
    })
}

/// True if `text` looks like a payload URI.
pub fn is_payload(text: &str) -> bool {
    text.trim_start()
        .strip_prefix(SCHEME)
        .is_some_and(|rest| rest.starts_with(PAYLOAD_TAG))
}

impl ShamirShareSet {
    /// One shard URI per share, ascending by index.
    pub fn to_uris(&self) -> Vec<String> {
        self.iter()
            .map(|share| {
                encode_share(
                    share.index,
                    self.threshold(),
                    self.modulus(),
                    &share.value,
                )
            })
            .collect()
    }

    /// Parse shard URIs and merge them into one set.
    pub fn from_uris<I, S>(uris: I) -> ShamirResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut merged: Option<ShamirShareSet> = None;
        for uri in uris {
            let parsed = parse_share(uri.as_ref())?;
            match merged.as_mut() {
                Some(set) => set.merge(parsed)?,
                None => merged = Some(parsed),
            }
        }
        merged.ok_or(ShamirError::InsufficientShares(1, 0))
    }
}
