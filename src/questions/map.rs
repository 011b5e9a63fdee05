use rand::Rng;

use super::{ChoiceQuestion, Prompt, QuestionKind, select_for};
use crate::catalog::Catalog;
use crate::engine::Always;
use crate::error::SelectError;
use crate::model::Country;

pub fn eligible(country: &Country) -> bool {
    country.has_geo()
}

/// "Which country is found here?" over the anchor's boundary.
pub fn generate<R: Rng + ?Sized>(
    catalog: &Catalog,
    rng: &mut R,
) -> Result<ChoiceQuestion, SelectError> {
    let kind = QuestionKind::MapLocation;
    let selection = select_for(kind, catalog, rng, eligible, |_, _| Always)?;
    let anchor = selection.anchor();
    let geo = anchor.geo.clone().ok_or_else(|| SelectError::MissingAsset {
        kind,
        code: anchor.code.clone(),
    })?;
    Ok(ChoiceQuestion::named(kind, selection, Prompt::Map(geo)))
}
