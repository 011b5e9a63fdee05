use rand::Rng;

use super::{ChoiceQuestion, Prompt, QuestionKind, select_for};
use crate::catalog::Catalog;
use crate::engine::Compatibility;
use crate::error::SelectError;
use crate::model::Country;

/// Distractors must differ from the anchor by more than this share of its population.
pub const MIN_RELATIVE_GAP: f64 = 0.1;

/// Keeps populations that could be mistaken for the anchor's out of the choices.
#[derive(Debug, Clone)]
pub struct PopulationGap {
    anchor: String,
    population: u64,
}

impl PopulationGap {
    pub fn new(anchor: &Country) -> Self {
        Self {
            anchor: anchor.code.clone(),
            population: anchor.population,
        }
    }
}

impl Compatibility for PopulationGap {
    fn admits(&self, candidate: &Country) -> bool {
        if candidate.code == self.anchor {
            return true;
        }
        // an empty anchor has no relative scale; any non-empty population differs
        if self.population == 0 {
            return candidate.population > 0;
        }
        let gap = self.population.abs_diff(candidate.population) as f64;
        gap / self.population as f64 > MIN_RELATIVE_GAP
    }
}

/// "What is the population of <country>?"
pub fn generate<R: Rng + ?Sized>(
    catalog: &Catalog,
    rng: &mut R,
) -> Result<ChoiceQuestion, SelectError> {
    let kind = QuestionKind::Population;
    let selection = select_for(kind, catalog, rng, |_: &Country| true, |anchor, _| {
        PopulationGap::new(anchor)
    })?;
    let labels = selection
        .choices
        .iter()
        .map(|c| format_population(c.population))
        .collect();

    Ok(ChoiceQuestion {
        kind,
        prompt: Prompt::Country(selection.anchor().name.clone()),
        correct_index: selection.correct_index,
        choices: selection.choices,
        labels,
    })
}

const UNITS: [(f64, &str); 4] = [
    (1e12, "trillion"),
    (1e9, "billion"),
    (1e6, "million"),
    (1e3, "thousand"),
];

/// Compact English notation with three significant digits: "1.23 million".
pub fn format_population(population: u64) -> String {
    let value = population as f64;
    for (scale, unit) in UNITS {
        // 999_500 already rounds to "1.00 million"
        if value >= scale * 0.9995 {
            return format!("{} {unit}", three_significant(value / scale));
        }
    }
    population.to_string()
}

fn three_significant(value: f64) -> String {
    let decimals = if value >= 99.95 {
        0
    } else if value >= 9.995 {
        1
    } else {
        2
    };
    format!("{value:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::with_population;
    use crate::questions::test_support::catalog;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Arc;

    #[test]
    fn twenty_percent_apart_are_mutual_distractors() {
        let a = with_population("A", 1_000_000);
        let b = with_population("B", 1_200_000);
        assert!(PopulationGap::new(&a).admits(&b));
        assert!(PopulationGap::new(&b).admits(&a));
    }

    #[test]
    fn five_percent_apart_never_share_a_question() {
        let a = with_population("A", 1_000_000);
        let b = with_population("B", 1_050_000);
        assert!(!PopulationGap::new(&a).admits(&b));
        assert!(!PopulationGap::new(&b).admits(&a));

        let countries = vec![Arc::new(a), Arc::new(b)];
        let catalog = Catalog::new(countries.iter().map(|c| (**c).clone()).collect())
            .expect("valid");
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..100 {
            let q = generate(&catalog, &mut rng).expect("generates");
            assert_eq!(q.choices.len(), 1);
        }
    }

    #[test]
    fn anchor_always_admits_itself() {
        let a = with_population("A", 5_000);
        assert!(PopulationGap::new(&a).admits(&a));
    }

    #[test]
    fn zero_population_anchor_is_defined() {
        let empty = with_population("AQ", 0);
        let also_empty = with_population("BV", 0);
        let tiny = with_population("PN", 50);
        let gap = PopulationGap::new(&empty);
        assert!(!gap.admits(&also_empty));
        assert!(gap.admits(&tiny));
        assert!(PopulationGap::new(&tiny).admits(&empty));
    }

    #[test]
    fn labels_are_formatted_populations() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..30 {
            let q = generate(&catalog, &mut rng).expect("generates");
            let gap = PopulationGap::new(q.anchor());
            for (i, choice) in q.choices.iter().enumerate() {
                assert_eq!(q.labels[i], format_population(choice.population));
                assert!(gap.admits(choice));
            }
        }
    }

    #[test]
    fn compact_formatting() {
        assert_eq!(format_population(0), "0");
        assert_eq!(format_population(812), "812");
        assert_eq!(format_population(1_234), "1.23 thousand");
        assert_eq!(format_population(45_000), "45.0 thousand");
        assert_eq!(format_population(1_000_000), "1.00 million");
        assert_eq!(format_population(999_999), "1.00 million");
        assert_eq!(format_population(123_456_789), "123 million");
        assert_eq!(format_population(1_412_000_000), "1.41 billion");
    }
}
