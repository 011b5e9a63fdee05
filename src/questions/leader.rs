use rand::Rng;

use super::{ChoiceQuestion, Prompt, QuestionKind, pick_one, select_for};
use crate::catalog::Catalog;
use crate::engine::Always;
use crate::error::SelectError;
use crate::model::Country;

pub fn eligible(country: &Country) -> bool {
    !country.heads_of_government.is_empty()
}

/// "Which country's government is led by <name>?"
pub fn generate<R: Rng + ?Sized>(
    catalog: &Catalog,
    rng: &mut R,
) -> Result<ChoiceQuestion, SelectError> {
    let kind = QuestionKind::HeadOfGovernment;
    let selection = select_for(kind, catalog, rng, eligible, |_, _| Always)?;
    let name = pick_one(&selection.anchor().heads_of_government, rng);
    Ok(ChoiceQuestion::named(kind, selection, Prompt::HeadOfGovernment(name)))
}
