use super::{encode, encoded_len};
use crate::{build, code_table, decode_all, round_trip, Symbol, TreeBuilder};
use alloc::vec::Vec;
use rand::{Rng, SeedableRng};

fn random_frequencies(rng: &mut rand::rngs::SmallRng) -> Vec<u64> {
    let len = rng.gen_range(1..300);
    let sparsity = rng.gen_range(0..4);
    (0..len)
        .map(|_| {
            if rng.gen_range(0..4) < sparsity {
                0
            } else {
                rng.gen_range(1..1000)
            }
        })
        .collect()
}

/// Cost of an optimal code: the sum of all merged weights, computed on a plain sorted list
fn optimal_cost(frequencies: &[u64]) -> u64 {
    let mut weights: Vec<u64> = frequencies.iter().copied().filter(|w| *w > 0).collect();
    let mut cost = 0;
    while weights.len() > 1 {
        weights.sort_unstable_by(|a, b| b.cmp(a));
        let merged = weights.pop().unwrap() + weights.pop().unwrap();
        cost += merged;
        weights.push(merged);
    }
    cost
}

#[test]
fn tables_round_trip() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(0xDEADBEEF);
    for _ in 0..200 {
        let frequencies = random_frequencies(&mut rng);
        let root = match build(&frequencies) {
            Ok(root) => root,
            Err(_) => {
                assert!(frequencies.iter().all(|w| *w == 0));
                continue;
            }
        };

        let table = code_table::serialize(&root);
        let reloaded = code_table::from_text(&code_table::to_text(&root)).unwrap();
        assert_eq!(code_table::serialize(&reloaded), table);

        let mut symbols: Vec<Symbol> = table.iter().map(|entry| entry.symbol).collect();
        symbols.sort_unstable();
        let expected: Vec<Symbol> = (0..frequencies.len())
            .filter(|symbol| frequencies[*symbol] > 0)
            .map(|symbol| symbol as Symbol)
            .collect();
        assert_eq!(symbols, expected);
    }
}

#[test]
fn codes_are_prefix_free() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(0xC0FFEE);
    for _ in 0..100 {
        let Ok(root) = build(&random_frequencies(&mut rng)) else {
            continue;
        };
        let table = code_table::serialize(&root);
        for a in &table {
            for b in &table {
                if a.symbol != b.symbol {
                    assert!(!b.path.starts_with(a.path.as_str()), "{:?} {:?}", a, b);
                }
            }
        }
    }
}

#[test]
fn codes_are_optimal() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(0x5EED);
    for _ in 0..100 {
        let frequencies = random_frequencies(&mut rng);
        let Ok(root) = build(&frequencies) else {
            continue;
        };
        if root.is_leaf() {
            continue;
        }
        assert_eq!(encoded_len(&root, &frequencies), optimal_cost(&frequencies));
    }
}

#[test]
fn every_step_merges_the_lightest() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(0xABCD);
    for _ in 0..50 {
        let mut builder = TreeBuilder::new(&random_frequencies(&mut rng));
        loop {
            let mut weights = builder.remaining_weights();
            weights.sort_unstable();
            match builder.merge_step().unwrap() {
                Some(merged) => assert_eq!(merged, (weights[0], weights[1])),
                None => break,
            }
        }
    }
}

#[test]
fn random_messages_decode() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(0xFACADE);
    for _ in 0..50 {
        let frequencies = random_frequencies(&mut rng);
        let Ok(root) = build(&frequencies) else {
            continue;
        };
        let alphabet: Vec<Symbol> = code_table::serialize(&root)
            .into_iter()
            .map(|entry| entry.symbol)
            .collect();
        let message: Vec<Symbol> = (0..rng.gen_range(0..500))
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
            .collect();

        let bits = encode(&root, &message);
        assert_eq!(decode_all(&root, bits).unwrap(), message);
    }
}

#[test]
fn random_bytes_round_trip() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(0xB17E5);
    for len in [0, 1, 2, 17, 1000] {
        let data: Vec<u8> = (0..len).map(|_| rng.gen_range(0..40)).collect();
        round_trip(&data);
    }
    round_trip(b"aaaaaaaa");
    round_trip(b"abracadabra");

    #[cfg(feature = "std")]
    if std::fs::exists("fuzz/artifacts/round_trip").unwrap_or(false) {
        for file in std::fs::read_dir("fuzz/artifacts/round_trip").unwrap() {
            if file.as_ref().unwrap().file_type().unwrap().is_file() {
                let data = std::fs::read(file.unwrap().path()).unwrap();
                round_trip(&data);
            }
        }
    }
}
