use math::arith::max_value_for_length;
use math::prelude::*;
use proptest::collection::vec;
use proptest::prelude::*;
use protoseed_core::uri::{encode_payload, parse_payload};
use protoseed_core::{recover, split, ShamirError, ShamirShareSet, SplitParams};
use rand::rngs::StdRng;
use rand::SeedableRng;
use test_strategy::proptest;

const SECRET: &[u8] = b"threshold integration test secret";

fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    fn helper<T: Clone>(
        items: &[T],
        k: usize,
        start: usize,
        current: &mut Vec<T>,
        result: &mut Vec<Vec<T>>,
    ) {
        if current.len() == k {
            result.push(current.clone());
            return;
        }
        for idx in start..items.len() {
            current.push(items[idx].clone());
            helper(items, k, idx + 1, current, result);
            current.pop();
        }
    }

    let mut result = Vec::new();
    let mut current = Vec::new();
    helper(items, k, 0, &mut current, &mut result);
    result
}

#[test]
fn every_k_subset_recovers_the_secret() {
    let set = split(SECRET, 3, 6, None).expect("split should succeed");
    let indices: Vec<u64> = set.indices().collect();

    for subset in combinations(&indices, 3) {
        let recovered = set
            .subset(&subset)
            .recover()
            .expect("recovery should succeed");
        assert_eq!(recovered, SECRET, "subset {subset:?}");
    }
}

#[test]
fn supersets_of_k_recover_the_secret() {
    let set = split(SECRET, 3, 6, None).unwrap();
    for subset in combinations(&set.indices().collect::<Vec<_>>(), 4) {
        assert_eq!(set.subset(&subset).recover().unwrap(), SECRET);
    }
}

#[test]
fn hello_scenario_with_fixed_modulus() {
    let params = SplitParams::new(3, 5).unwrap().with_modulus(128);
    let set = ShamirShareSet::split(b"hello", &params).unwrap();
    assert_eq!(set.len(), 5);
    assert_eq!(set.modulus(), 128);
    assert_eq!(recover(&set.subset(&[1, 3, 5])).unwrap(), b"hello");
    assert_eq!(recover(&set.subset(&[2, 4, 5])).unwrap(), b"hello");
}

#[test]
fn round_trip_all_small_configurations() {
    let mut rng = StdRng::seed_from_u64(42);
    for n in 2..=20usize {
        for k in 2..=n {
            let secret: Vec<u8> = (0..(k + n) as u8).collect();
            let params = SplitParams::new(k, n).unwrap();
            let set =
                ShamirShareSet::split_with_rng(&mut rng, &secret, &params)
                    .unwrap();
            // the k highest indices
            let top: Vec<u64> = ((n - k + 1) as u64..=n as u64).collect();
            assert_eq!(set.subset(&top).recover().unwrap(), secret);
            assert_eq!(set.recover().unwrap(), secret);
        }
    }
}

#[test]
fn secret_lengths_cross_field_boundaries() {
    for length in [0usize, 1, 2, 14, 15, 16, 31, 32, 63, 64, 127, 128, 511, 512] {
        let secret: Vec<u8> = (0..length).map(|i| (i * 37) as u8).collect();
        let set = split(&secret, 2, 3, None).unwrap();
        let field = PrimeField::from_label(set.modulus()).unwrap();

        let framed_max = max_value_for_length(length + 1);
        assert!(field.contains(&framed_max), "length {length}");
        assert_eq!(set.subset(&[1, 3]).recover().unwrap(), secret);
    }
}

#[test]
fn below_threshold_is_rejected() {
    let set = split(SECRET, 4, 6, None).unwrap();
    assert_eq!(
        set.subset(&[1, 2, 6]).recover().unwrap_err(),
        ShamirError::InsufficientShares(4, 3)
    );
}

#[test]
fn below_threshold_without_threshold_rarely_matches() {
    let mut hits = 0;
    for _ in 0..64 {
        let set = split(b"s", 3, 3, None).unwrap();
        let partial = ShamirShareSet::from_shares(
            set.modulus(),
            None,
            set.subset(&[1, 2]).iter(),
        )
        .unwrap();
        if partial.recover().unwrap() == b"s" {
            hits += 1;
        }
    }
    assert!(hits <= 1, "{hits} below-threshold recoveries matched");
}

#[test]
fn shards_round_trip_through_uris() {
    let payload = parse_payload(&encode_payload(SECRET)).unwrap();
    let set = split(&payload, 2, 3, None).unwrap();
    let shards = set.to_uris();

    let merged = ShamirShareSet::from_uris(&shards[1..]).unwrap();
    assert_eq!(
        encode_payload(&merged.recover().unwrap()),
        encode_payload(SECRET)
    );
}

#[test]
fn shares_from_different_splits_do_not_recover() {
    let a = split(SECRET, 2, 3, None).unwrap();
    let b = split(SECRET, 2, 3, None).unwrap();
    let mut mixed = a.subset(&[1]);
    mixed.merge(b.subset(&[2])).unwrap();
    assert_ne!(mixed.recover().unwrap(), SECRET);
}

#[proptest(ProptestConfig::with_cases(64))]
fn any_k_shares_recover(
    #[strategy(vec(any::<u8>(), 0..96))] secret: Vec<u8>,
    #[strategy(2usize..8)] threshold: usize,
    #[strategy(0usize..5)] extra: usize,
    seed: u64,
) {
    let share_count = threshold + extra;
    let params = SplitParams::new(threshold, share_count).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    let set =
        ShamirShareSet::split_with_rng(&mut rng, &secret, &params).unwrap();

    // a pseudo-random k-subset driven by the seed
    let mut indices: Vec<u64> = set.indices().collect();
    let rotation = (seed % share_count as u64) as usize;
    indices.rotate_left(rotation);
    indices.truncate(threshold);

    prop_assert_eq!(set.subset(&indices).recover().unwrap(), secret);
}
