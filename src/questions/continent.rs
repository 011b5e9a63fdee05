use std::collections::BTreeSet;
use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;

use super::{QuestionKind, pick_from};
use crate::catalog::Catalog;
use crate::error::SelectError;
use crate::model::Country;
use crate::round::Outcome;

/// Informal names mapped to the catalog's canonical country names.
pub const ALIASES: &[(&str, &str)] = &[
    ("usa", "United States"),
    ("us", "United States"),
    ("u.s.", "United States"),
    ("u.s.a.", "United States"),
    ("america", "United States"),
    ("united states of america", "United States"),
    ("uk", "United Kingdom"),
    ("u.k.", "United Kingdom"),
    ("britain", "United Kingdom"),
    ("great britain", "United Kingdom"),
    ("dprk", "North Korea"),
    ("rok", "South Korea"),
    ("korea", "South Korea"),
    ("uae", "United Arab Emirates"),
    ("drc", "DR Congo"),
    ("democratic republic of the congo", "DR Congo"),
    ("czech republic", "Czechia"),
    ("holland", "Netherlands"),
    ("burma", "Myanmar"),
    ("ivory coast", "Côte d'Ivoire"),
    ("cote d'ivoire", "Côte d'Ivoire"),
    ("turkey", "Türkiye"),
    ("swaziland", "Eswatini"),
    ("prc", "China"),
    ("vatican", "Vatican City"),
];

/// Lowercases, trims, collapses whitespace and drops a leading "the".
pub fn normalize(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    let collapsed = lowered.split_whitespace().collect::<Vec<_>>().join(" ");
    match collapsed.strip_prefix("the ") {
        Some(rest) => rest.to_string(),
        None => collapsed,
    }
}

/// Normalized canonical name for free-text input, applying the alias table.
pub fn canonical(input: &str) -> String {
    let key = normalize(input);
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, name)| normalize(name))
        .unwrap_or(key)
}

/// "Which continent is <country> in?" Every one of the country's continents is accepted.
#[derive(Debug, Clone)]
pub struct MembershipQuestion {
    pub country: Arc<Country>,
    /// All continents known to the catalog, sorted
    pub continents: Vec<String>,
    /// Indices into `continents` that count as correct
    pub correct: BTreeSet<usize>,
}

impl MembershipQuestion {
    pub fn is_correct(&self, index: usize) -> bool {
        self.correct.contains(&index)
    }

    pub fn judge(&self, index: usize) -> Outcome {
        let fatal = QuestionKind::ContinentMembership.fatal();
        if self.is_correct(index) {
            Outcome::Correct { fatal }
        } else {
            Outcome::Incorrect { fatal }
        }
    }

    pub fn prompt_text(&self) -> String {
        format!("Which continent is {} in?", self.country.name)
    }
}

pub fn membership<R: Rng + ?Sized>(
    catalog: &Catalog,
    rng: &mut R,
) -> Result<MembershipQuestion, SelectError> {
    let country = catalog
        .countries()
        .choose(rng)
        .cloned()
        .ok_or(SelectError::NoEligibleCountry {
            kind: QuestionKind::ContinentMembership,
        })?;

    let continents: Vec<String> = catalog.continents_universe().iter().cloned().collect();
    let correct = continents
        .iter()
        .enumerate()
        .filter(|(_, name)| country.is_in(name))
        .map(|(idx, _)| idx)
        .collect();

    Ok(MembershipQuestion {
        country,
        continents,
        correct,
    })
}

/// "Name the countries of <continent>." Answered by free text.
#[derive(Debug, Clone)]
pub struct NamingQuestion {
    pub continent: String,
    pub targets: Vec<Arc<Country>>,
}

impl NamingQuestion {
    pub fn prompt_text(&self) -> String {
        format!("Name every country in {}.", self.continent)
    }

    /// Target matching the input, by canonical name.
    pub fn resolve(&self, input: &str) -> Option<&Arc<Country>> {
        let wanted = canonical(input);
        if wanted.is_empty() {
            return None;
        }
        self.targets.iter().find(|c| normalize(&c.name) == wanted)
    }
}

pub fn naming<R: Rng + ?Sized>(
    catalog: &Catalog,
    rng: &mut R,
) -> Result<NamingQuestion, SelectError> {
    let continent = pick_from(catalog.continents_universe(), rng)
        .cloned()
        .ok_or(SelectError::NoEligibleCountry {
            kind: QuestionKind::ContinentNaming,
        })?;
    let targets = catalog.in_continent(&continent).cloned().collect();
    Ok(NamingQuestion { continent, targets })
}

#[derive(Debug, Clone, PartialEq)]
pub enum NamingAttempt {
    Found(Arc<Country>),
    AlreadyFound(Arc<Country>),
    /// Not (yet) a match; never an error
    NoMatch,
}

/// Player's progress on a naming question; the question itself stays untouched.
#[derive(Debug, Clone, Default)]
pub struct NamingProgress {
    found: BTreeSet<String>,
}

impl NamingProgress {
    pub fn submit(&mut self, question: &NamingQuestion, input: &str) -> NamingAttempt {
        match question.resolve(input) {
            Some(country) if self.found.insert(country.code.clone()) => {
                NamingAttempt::Found(Arc::clone(country))
            }
            Some(country) => NamingAttempt::AlreadyFound(Arc::clone(country)),
            None => NamingAttempt::NoMatch,
        }
    }

    pub fn has_found(&self, code: &str) -> bool {
        self.found.contains(code)
    }

    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    pub fn is_complete(&self, question: &NamingQuestion) -> bool {
        question.targets.iter().all(|c| self.found.contains(&c.code))
    }

    /// Outcome once the player finishes or gives up.
    pub fn outcome(&self, question: &NamingQuestion) -> Outcome {
        let fatal = QuestionKind::ContinentNaming.fatal();
        if self.is_complete(question) {
            Outcome::Correct { fatal }
        } else {
            Outcome::Incorrect { fatal }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::country;
    use crate::questions::test_support::catalog;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn eurasian() -> Country {
        let mut ru = country("RU", "Russia");
        ru.continents = vec!["Europe".into(), "Asia".into()];
        ru
    }

    #[test]
    fn either_continent_of_a_transcontinental_country_is_correct() {
        let catalog = Catalog::new(vec![eurasian()]).expect("valid");
        let mut rng = StdRng::seed_from_u64(0);
        let q = membership(&catalog, &mut rng).expect("generates");

        assert_eq!(q.continents, vec!["Asia".to_string(), "Europe".to_string()]);
        assert_eq!(q.judge(0), Outcome::Correct { fatal: false });
        assert_eq!(q.judge(1), Outcome::Correct { fatal: false });
    }

    #[test]
    fn wrong_continent_is_incorrect() {
        let mut br = country("BR", "Brazil");
        br.continents = vec!["South America".into()];
        let catalog = Catalog::new(vec![eurasian(), br]).expect("valid");
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            let q = membership(&catalog, &mut rng).expect("generates");
            for (idx, name) in q.continents.iter().enumerate() {
                assert_eq!(q.is_correct(idx), q.country.is_in(name));
            }
            assert!(!q.correct.is_empty());
        }
    }

    #[test]
    fn aliases_and_case_are_ignored() {
        assert_eq!(canonical("  USA "), "united states");
        assert_eq!(canonical("uk"), "united kingdom");
        assert_eq!(canonical("DPRK"), "north korea");
        assert_eq!(canonical("The   Netherlands"), "netherlands");
        assert_eq!(canonical("Holland"), "netherlands");
        assert_eq!(canonical("fRaNcE"), "france");
    }

    #[test]
    fn naming_progress_tracks_matches() {
        let catalog = catalog();
        let q = NamingQuestion {
            continent: "Europe".into(),
            targets: catalog.in_continent("Europe").cloned().collect(),
        };
        let mut progress = NamingProgress::default();

        assert!(matches!(progress.submit(&q, "france"), NamingAttempt::Found(c) if c.code == "FR"));
        assert!(matches!(progress.submit(&q, "FRANCE"), NamingAttempt::AlreadyFound(_)));
        assert!(matches!(progress.submit(&q, "uk"), NamingAttempt::Found(c) if c.code == "GB"));
        assert_eq!(progress.submit(&q, "Atlantis"), NamingAttempt::NoMatch);
        assert_eq!(progress.submit(&q, "   "), NamingAttempt::NoMatch);
        // Brazil exists but is not in Europe
        assert_eq!(progress.submit(&q, "Brazil"), NamingAttempt::NoMatch);

        assert_eq!(progress.found_count(), 2);
        assert!(!progress.is_complete(&q));
        assert_eq!(progress.outcome(&q), Outcome::Incorrect { fatal: false });

        for target in &q.targets {
            progress.submit(&q, &target.name);
        }
        assert!(progress.is_complete(&q));
        assert_eq!(progress.outcome(&q), Outcome::Correct { fatal: false });
    }

    #[test]
    fn naming_targets_come_from_the_chosen_continent() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(16);
        for _ in 0..20 {
            let q = naming(&catalog, &mut rng).expect("generates");
            assert!(catalog.continents_universe().contains(&q.continent));
            assert!(!q.targets.is_empty());
            assert!(q.targets.iter().all(|c| c.is_in(&q.continent)));
        }
    }
}
