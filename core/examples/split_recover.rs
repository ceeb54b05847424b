use protoseed_core::uri::encode_payload;
use protoseed_core::{ShamirShareSet, SplitParams};

const SECRET: &[u8] = b"correct horse battery staple";

/// Split a secret 3-of-5, print the shards, then recover it from two
/// different subsets of three.
fn main() {
    let params = SplitParams::new(3, 5)
        .expect("3-of-5 is a valid configuration")
        .with_modulus(256);
    let set =
        ShamirShareSet::split(SECRET, &params).expect("split should succeed");

    for shard in set.to_uris() {
        println!("{shard}");
    }

    for subset in [[1, 3, 5], [2, 4, 5]] {
        let secret = set
            .subset(&subset)
            .recover()
            .expect("recovery should succeed");
        assert_eq!(secret, SECRET);
        println!("{subset:?} -> {}", encode_payload(&secret));
    }
}
