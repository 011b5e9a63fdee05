//! One module per question kind. Every kind is a fixed configuration of
//! eligibility, compatibility and display derivation; `Question::generate`
//! dispatches on the tag.

use std::sync::Arc;

use rand::Rng;
use rand::seq::{IteratorRandom, SliceRandom};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::engine::{Compatibility, Eligibility, Selection, select};
use crate::error::SelectError;
use crate::model::{AssetRef, Country};
use crate::round::Outcome;

pub mod border;
pub mod capital;
pub mod continent;
pub mod division;
pub mod flag;
pub mod leader;
pub mod map;
pub mod population;

pub use continent::{MembershipQuestion, NamingAttempt, NamingProgress, NamingQuestion};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    CapitalToCountry,
    CountryToCapital,
    FlagToCountry,
    CountryToFlag,
    Population,
    Border,
    Division,
    HeadOfGovernment,
    MapLocation,
    ContinentNaming,
    ContinentMembership,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 11] = [
        QuestionKind::CapitalToCountry,
        QuestionKind::CountryToCapital,
        QuestionKind::FlagToCountry,
        QuestionKind::CountryToFlag,
        QuestionKind::Population,
        QuestionKind::Border,
        QuestionKind::Division,
        QuestionKind::HeadOfGovernment,
        QuestionKind::MapLocation,
        QuestionKind::ContinentNaming,
        QuestionKind::ContinentMembership,
    ];

    /// Whether a wrong answer ends the run outright (and a right one restores a life).
    pub fn fatal(self) -> bool {
        match self {
            QuestionKind::CapitalToCountry
            | QuestionKind::CountryToCapital
            | QuestionKind::FlagToCountry
            | QuestionKind::CountryToFlag
            | QuestionKind::Border
            | QuestionKind::MapLocation => true,
            QuestionKind::Population
            | QuestionKind::Division
            | QuestionKind::HeadOfGovernment
            | QuestionKind::ContinentNaming
            | QuestionKind::ContinentMembership => false,
        }
    }

    /// True when at least one country in `catalog` can anchor this kind.
    pub fn supported_by(self, catalog: &Catalog) -> bool {
        let sets = catalog.derived();
        match self {
            QuestionKind::CapitalToCountry | QuestionKind::CountryToCapital => {
                !sets.with_capitals.is_empty()
            }
            QuestionKind::FlagToCountry | QuestionKind::CountryToFlag => !sets.with_flag.is_empty(),
            QuestionKind::Border => !sets.with_borders.is_empty(),
            QuestionKind::Division => !sets.with_divisions.is_empty(),
            QuestionKind::HeadOfGovernment => !sets.with_heads_of_government.is_empty(),
            QuestionKind::MapLocation => !sets.with_geo.is_empty(),
            QuestionKind::Population
            | QuestionKind::ContinentNaming
            | QuestionKind::ContinentMembership => {
                !catalog.is_empty() && !sets.continents_universe.is_empty()
            }
        }
    }

    /// Uniform pick among the enabled kinds.
    pub fn random<R: Rng + ?Sized>(enabled: &[QuestionKind], rng: &mut R) -> Option<QuestionKind> {
        enabled.choose(rng).copied()
    }
}

/// Kind-specific data shown alongside the choices.
#[derive(Debug, Clone, PartialEq)]
pub enum Prompt {
    Capital(String),
    Country(String),
    Flag(AssetRef),
    BorderCountry(String),
    Division(String),
    HeadOfGovernment(String),
    Map(AssetRef),
}

/// A multiple-choice question built by the candidate selector.
#[derive(Debug, Clone)]
pub struct ChoiceQuestion {
    pub kind: QuestionKind,
    pub choices: Vec<Arc<Country>>,
    pub correct_index: usize,
    pub prompt: Prompt,
    /// Text for each choice, same order as `choices`
    pub labels: Vec<String>,
}

impl ChoiceQuestion {
    pub fn anchor(&self) -> &Arc<Country> {
        &self.choices[self.correct_index]
    }

    pub fn fatal(&self) -> bool {
        self.kind.fatal()
    }

    pub fn judge(&self, index: usize) -> Outcome {
        let fatal = self.fatal();
        if index == self.correct_index {
            Outcome::Correct { fatal }
        } else {
            Outcome::Incorrect { fatal }
        }
    }

    pub fn prompt_text(&self) -> String {
        match (&self.kind, &self.prompt) {
            (_, Prompt::Capital(capital)) => format!("{capital} is a capital of which country?"),
            (QuestionKind::CountryToCapital, Prompt::Country(name)) => {
                format!("Which is a capital of {name}?")
            }
            (QuestionKind::CountryToFlag, Prompt::Country(name)) => {
                format!("Which is the flag of {name}?")
            }
            (_, Prompt::Country(name)) => format!("What is the population of {name}?"),
            (_, Prompt::Flag(_)) => "Which country has the following flag?".to_string(),
            (_, Prompt::BorderCountry(name)) => format!("Which country borders {name}?"),
            (_, Prompt::Division(division)) => {
                format!("{division} is an administrative division of which country?")
            }
            (_, Prompt::HeadOfGovernment(name)) => {
                format!("Which country's government is led by {name}?")
            }
            (_, Prompt::Map(_)) => "Which country is found here?".to_string(),
        }
    }

    /// Country names as labels, the common case.
    fn named(kind: QuestionKind, selection: Selection<impl Compatibility>, prompt: Prompt) -> Self {
        let labels = selection.choices.iter().map(|c| c.name.clone()).collect();
        Self {
            kind,
            choices: selection.choices,
            correct_index: selection.correct_index,
            prompt,
            labels,
        }
    }
}

/// The value handed to the front-end each round. Never mutated once built.
#[derive(Debug, Clone)]
pub enum Question {
    Choice(ChoiceQuestion),
    Membership(MembershipQuestion),
    Naming(NamingQuestion),
}

impl Question {
    pub fn generate<R: Rng + ?Sized>(
        kind: QuestionKind,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Result<Question, SelectError> {
        let question = match kind {
            QuestionKind::CapitalToCountry => {
                Question::Choice(capital::capital_to_country(catalog, rng)?)
            }
            QuestionKind::CountryToCapital => {
                Question::Choice(capital::country_to_capital(catalog, rng)?)
            }
            QuestionKind::FlagToCountry => Question::Choice(flag::flag_to_country(catalog, rng)?),
            QuestionKind::CountryToFlag => Question::Choice(flag::country_to_flag(catalog, rng)?),
            QuestionKind::Population => Question::Choice(population::generate(catalog, rng)?),
            QuestionKind::Border => Question::Choice(border::generate(catalog, rng)?),
            QuestionKind::Division => Question::Choice(division::generate(catalog, rng)?),
            QuestionKind::HeadOfGovernment => Question::Choice(leader::generate(catalog, rng)?),
            QuestionKind::MapLocation => Question::Choice(map::generate(catalog, rng)?),
            QuestionKind::ContinentNaming => {
                Question::Naming(continent::naming(catalog, rng)?)
            }
            QuestionKind::ContinentMembership => {
                Question::Membership(continent::membership(catalog, rng)?)
            }
        };
        log::debug!("generated {kind:?} question");
        Ok(question)
    }

    pub fn kind(&self) -> QuestionKind {
        match self {
            Question::Choice(q) => q.kind,
            Question::Membership(_) => QuestionKind::ContinentMembership,
            Question::Naming(_) => QuestionKind::ContinentNaming,
        }
    }

    pub fn fatal(&self) -> bool {
        self.kind().fatal()
    }
}

/// Runs the selector and turns "nobody eligible" into a contract error.
fn select_for<R, E, D, P>(
    kind: QuestionKind,
    catalog: &Catalog,
    rng: &mut R,
    eligibility: E,
    derive: D,
) -> Result<Selection<P>, SelectError>
where
    R: Rng + ?Sized,
    E: Eligibility,
    D: FnOnce(&Country, &mut R) -> P,
    P: Compatibility,
{
    select(catalog.countries(), rng, eligibility, derive)
        .ok_or(SelectError::NoEligibleCountry { kind })
}

/// Random entry of a list the eligibility predicate guarantees is non-empty.
fn pick_one<R: Rng + ?Sized>(items: &[String], rng: &mut R) -> String {
    items.choose(rng).cloned().unwrap_or_default()
}

fn pick_from<'a, R, I>(items: I, rng: &mut R) -> Option<&'a String>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = &'a String>,
{
    items.into_iter().choose(rng)
}
