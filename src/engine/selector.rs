use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;

use super::predicate::{Compatibility, Eligibility};
use super::shuffle::shuffled;
use crate::model::{Country, OPTION_COUNT};

/// Outcome of a selection: the ordered choices, where the anchor ended up,
/// and the compatibility filter that was derived from the anchor.
#[derive(Debug, Clone)]
pub struct Selection<P> {
    pub choices: Vec<Arc<Country>>,
    pub correct_index: usize,
    pub filter: P,
}

impl<P> Selection<P> {
    pub fn anchor(&self) -> &Arc<Country> {
        &self.choices[self.correct_index]
    }
}

/// Picks an anchor and up to `OPTION_COUNT - 1` distractors from one shuffled
/// pass over `countries`.
///
/// The anchor is the first eligible entry of the permutation. `derive` builds
/// the compatibility filter from it; distractors are the compatible entries
/// that follow the anchor in the same permutation. The anchor is always kept,
/// so the result has between 1 and `OPTION_COUNT` pairwise distinct entries.
///
/// Returns `None` when no country is eligible.
pub fn select<R, E, D, P>(
    countries: &[Arc<Country>],
    rng: &mut R,
    eligibility: E,
    derive: D,
) -> Option<Selection<P>>
where
    R: Rng + ?Sized,
    E: Eligibility,
    D: FnOnce(&Country, &mut R) -> P,
    P: Compatibility,
{
    let pool = shuffled(countries, rng);
    let start = pool.iter().position(|c| eligibility.eligible(c))?;
    let anchor = Arc::clone(&pool[start]);
    let filter = derive(anchor.as_ref(), &mut *rng);

    let mut picked: Vec<(Arc<Country>, bool)> = Vec::with_capacity(OPTION_COUNT);
    picked.extend(
        pool[start + 1..]
            .iter()
            .filter(|c| !c.same_as(&anchor) && filter.admits(c))
            .take(OPTION_COUNT - 1)
            .map(|c| (Arc::clone(c), false)),
    );
    picked.push((anchor, true));

    // keep the anchor from always landing in the same slot
    picked.shuffle(rng);

    let correct_index = picked
        .iter()
        .position(|(_, is_anchor)| *is_anchor)?;

    Some(Selection {
        choices: picked.into_iter().map(|(country, _)| country).collect(),
        correct_index,
        filter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::predicate::Always;
    use crate::model::fixtures::{country, with_population};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn pool(n: usize) -> Vec<Arc<Country>> {
        (0..n)
            .map(|i| Arc::new(with_population(&format!("C{i}"), i as u64 * 100)))
            .collect()
    }

    #[test]
    fn fills_up_to_option_count() {
        let countries = pool(20);
        let mut rng = StdRng::seed_from_u64(7);
        let selection = select(&countries, &mut rng, |_: &Country| true, |_, _| Always)
            .expect("everyone is eligible");
        assert_eq!(selection.choices.len(), OPTION_COUNT);
        assert!(selection.correct_index < OPTION_COUNT);
    }

    #[test]
    fn no_eligible_country_yields_none() {
        let countries = pool(5);
        let mut rng = StdRng::seed_from_u64(7);
        let selection = select(&countries, &mut rng, |_: &Country| false, |_, _| Always);
        assert!(selection.is_none());
    }

    #[test]
    fn rejecting_filter_degenerates_to_the_anchor_alone() {
        let countries = pool(10);
        let mut rng = StdRng::seed_from_u64(3);
        let selection = select(
            &countries,
            &mut rng,
            |c: &Country| c.code == "C4",
            |_, _| |_: &Country| false,
        )
        .expect("C4 is eligible");
        assert_eq!(selection.choices.len(), 1);
        assert_eq!(selection.correct_index, 0);
        assert_eq!(selection.anchor().code, "C4");
    }

    #[test]
    fn small_pools_give_short_choice_sets() {
        let countries = vec![Arc::new(country("A", "A")), Arc::new(country("B", "B"))];
        let mut rng = StdRng::seed_from_u64(11);
        let selection = select(&countries, &mut rng, |_: &Country| true, |_, _| Always)
            .expect("eligible");
        // only what follows the anchor in the permutation can be drawn
        assert!((1..=2).contains(&selection.choices.len()));
    }

    #[test]
    fn anchor_position_is_not_biased_to_the_front() {
        let countries = pool(30);
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let selection = select(&countries, &mut rng, |_: &Country| true, |_, _| Always)
                .expect("eligible");
            seen.insert(selection.correct_index);
        }
        assert_eq!(seen.len(), OPTION_COUNT);
    }

    #[test]
    fn derive_receives_the_anchor() {
        #[derive(Debug)]
        struct AnchorCode(String);
        impl Compatibility for AnchorCode {
            fn admits(&self, candidate: &Country) -> bool {
                candidate.code != self.0
            }
        }

        let countries = pool(12);
        let mut rng = StdRng::seed_from_u64(5);
        let selection = select(
            &countries,
            &mut rng,
            |c: &Country| c.population >= 500,
            |anchor, _| AnchorCode(anchor.code.clone()),
        )
        .expect("eligible");
        assert_eq!(selection.filter.0, selection.anchor().code);
    }

    proptest! {
        #[test]
        fn prop_selection_respects_predicates(
            populations in proptest::collection::vec(0u64..1_000, 1..40),
            threshold in 0u64..1_000,
            seed in any::<u64>()
        ) {
            let countries: Vec<Arc<Country>> = populations
                .iter()
                .enumerate()
                .map(|(i, p)| Arc::new(with_population(&format!("C{i}"), *p)))
                .collect();
            let eligible = |c: &Country| c.population >= threshold;
            prop_assume!(countries.iter().any(|c| eligible(c.as_ref())));

            let mut rng = StdRng::seed_from_u64(seed);
            let selection = select(&countries, &mut rng, eligible, |anchor, _| {
                let parity = anchor.population % 2;
                move |c: &Country| c.population % 2 != parity
            })
            .expect("some country is eligible");

            prop_assert!((1..=OPTION_COUNT).contains(&selection.choices.len()));
            prop_assert!(selection.correct_index < selection.choices.len());

            let codes: HashSet<_> = selection.choices.iter().map(|c| c.code.clone()).collect();
            prop_assert_eq!(codes.len(), selection.choices.len());

            let anchor = selection.anchor();
            prop_assert!(eligible(anchor.as_ref()));
            for (i, choice) in selection.choices.iter().enumerate() {
                if i != selection.correct_index {
                    prop_assert!(selection.filter.admits(choice));
                }
            }
        }
    }
}
