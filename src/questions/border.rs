use rand::Rng;

use super::{ChoiceQuestion, Prompt, QuestionKind, pick_one, select_for};
use crate::catalog::Catalog;
use crate::engine::Compatibility;
use crate::error::SelectError;
use crate::model::Country;

pub fn eligible(country: &Country) -> bool {
    !country.border_countries.is_empty()
}

/// Rejects anyone else who also borders the neighbour named in the prompt.
#[derive(Debug, Clone)]
pub struct SharedNeighbour {
    anchor: String,
    pub neighbour: String,
}

impl SharedNeighbour {
    pub fn pick<R: Rng + ?Sized>(anchor: &Country, rng: &mut R) -> Self {
        Self {
            anchor: anchor.code.clone(),
            neighbour: pick_one(&anchor.border_countries, rng),
        }
    }
}

impl Compatibility for SharedNeighbour {
    fn admits(&self, candidate: &Country) -> bool {
        candidate.code == self.anchor || !candidate.borders(&self.neighbour)
    }
}

/// "Which country borders <neighbour>?"
pub fn generate<R: Rng + ?Sized>(
    catalog: &Catalog,
    rng: &mut R,
) -> Result<ChoiceQuestion, SelectError> {
    let kind = QuestionKind::Border;
    let selection = select_for(kind, catalog, rng, eligible, SharedNeighbour::pick)?;
    let neighbour = catalog.name_of(&selection.filter.neighbour).to_string();
    Ok(ChoiceQuestion::named(kind, selection, Prompt::BorderCountry(neighbour)))
}
