use rand::Rng;
use rand::seq::SliceRandom;

/// Returns a uniformly permuted copy of `items`; the input is left untouched.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    // Fisher-Yates
    out.shuffle(rng);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    #[test]
    fn empty_and_singleton() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(shuffled::<u8, _>(&[], &mut rng).is_empty());
        assert_eq!(shuffled(&["only"], &mut rng), vec!["only"]);
    }

    #[test]
    fn input_is_not_mutated() {
        let mut rng = StdRng::seed_from_u64(2);
        let input = vec![1, 2, 3, 4, 5];
        let _ = shuffled(&input, &mut rng);
        assert_eq!(input, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn permutations_are_close_to_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        let trials = 60_000;
        let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();
        for _ in 0..trials {
            *counts.entry(shuffled(&[1u8, 2, 3], &mut rng)).or_default() += 1;
        }

        assert_eq!(counts.len(), 6);
        let expected = trials / 6;
        for (perm, count) in counts {
            let diff = count.abs_diff(expected);
            assert!(diff < expected / 10, "{perm:?} drawn {count} times");
        }
    }

    proptest! {
        #[test]
        fn prop_shuffle_preserves_the_multiset(
            items in proptest::collection::vec(0u16..50, 0..40),
            seed in any::<u64>()
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut out = shuffled(&items, &mut rng);
            prop_assert_eq!(out.len(), items.len());

            let mut sorted = items.clone();
            sorted.sort_unstable();
            out.sort_unstable();
            prop_assert_eq!(out, sorted);
        }
    }
}
