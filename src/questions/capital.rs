use rand::Rng;

use super::{ChoiceQuestion, Prompt, QuestionKind, pick_one, select_for};
use crate::catalog::Catalog;
use crate::engine::Always;
use crate::error::SelectError;
use crate::model::Country;

pub fn eligible(country: &Country) -> bool {
    country.has_capital()
}

/// "<capital> is a capital of which country?"
pub fn capital_to_country<R: Rng + ?Sized>(
    catalog: &Catalog,
    rng: &mut R,
) -> Result<ChoiceQuestion, SelectError> {
    let kind = QuestionKind::CapitalToCountry;
    let selection = select_for(kind, catalog, rng, eligible, |_, _| Always)?;
    let capital = pick_one(&selection.anchor().capitals, rng);
    Ok(ChoiceQuestion::named(kind, selection, Prompt::Capital(capital)))
}

/// "Which is a capital of <country>?" Each choice shows one of its capitals.
pub fn country_to_capital<R: Rng + ?Sized>(
    catalog: &Catalog,
    rng: &mut R,
) -> Result<ChoiceQuestion, SelectError> {
    let kind = QuestionKind::CountryToCapital;
    // every choice is labelled with one of its own capitals
    let selection = select_for(kind, catalog, rng, eligible, |_, _| eligible)?;
    let labels = selection
        .choices
        .iter()
        .map(|c| pick_one(&c.capitals, rng))
        .collect();

    Ok(ChoiceQuestion {
        kind,
        prompt: Prompt::Country(selection.anchor().name.clone()),
        correct_index: selection.correct_index,
        choices: selection.choices,
        labels,
    })
}
