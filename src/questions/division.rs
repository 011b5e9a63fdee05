use rand::Rng;

use super::{ChoiceQuestion, Prompt, QuestionKind, pick_one, select_for};
use crate::catalog::Catalog;
use crate::engine::Compatibility;
use crate::error::SelectError;
use crate::model::Country;

pub fn eligible(country: &Country) -> bool {
    !country.divisions.is_empty()
}

/// Rejects other countries with a division of the same name ("Georgia", "Limburg").
#[derive(Debug, Clone)]
pub struct SharedDivision {
    anchor: String,
    pub division: String,
}

impl SharedDivision {
    pub fn pick<R: Rng + ?Sized>(anchor: &Country, rng: &mut R) -> Self {
        Self {
            anchor: anchor.code.clone(),
            division: pick_one(&anchor.divisions, rng),
        }
    }
}

impl Compatibility for SharedDivision {
    fn admits(&self, candidate: &Country) -> bool {
        candidate.code == self.anchor || !candidate.has_division(&self.division)
    }
}

/// "<division> is an administrative division of which country?"
pub fn generate<R: Rng + ?Sized>(
    catalog: &Catalog,
    rng: &mut R,
) -> Result<ChoiceQuestion, SelectError> {
    let kind = QuestionKind::Division;
    let selection = select_for(kind, catalog, rng, eligible, SharedDivision::pick)?;
    let division = selection.filter.division.clone();
    Ok(ChoiceQuestion::named(kind, selection, Prompt::Division(division)))
}
