use rand::Rng;

use super::{ChoiceQuestion, Prompt, QuestionKind, select_for};
use crate::catalog::Catalog;
use crate::engine::Compatibility;
use crate::engine::predicate::ExcludedPairs;
use crate::error::{AssetError, SelectError};
use crate::model::{AssetRef, Country};

/// Flags too alike to tell apart at button size.
pub const CONFUSABLE_FLAGS: &[(&str, &str)] = &[("TD", "RO"), ("ID", "MC")];

pub fn eligible(country: &Country) -> bool {
    country.has_flag()
}

fn distinguishable(anchor: &Country) -> ExcludedPairs {
    ExcludedPairs::new(anchor, CONFUSABLE_FLAGS)
}

/// Flag options are images, so every distractor needs a flag of its own.
fn flag_options(anchor: &Country) -> impl Compatibility + use<> {
    let pairs = distinguishable(anchor);
    move |candidate: &Country| candidate.has_flag() && pairs.admits(candidate)
}

/// Asset reference for a choice's flag.
pub fn flag_of(country: &Country) -> Result<&AssetRef, AssetError> {
    country
        .flag_image
        .as_ref()
        .ok_or_else(|| AssetError::Missing(country.code.clone()))
}

/// "Which country has the following flag?"
pub fn flag_to_country<R: Rng + ?Sized>(
    catalog: &Catalog,
    rng: &mut R,
) -> Result<ChoiceQuestion, SelectError> {
    let kind = QuestionKind::FlagToCountry;
    let selection = select_for(kind, catalog, rng, eligible, |anchor, _| {
        distinguishable(anchor)
    })?;
    let anchor = selection.anchor();
    let flag = anchor
        .flag_image
        .clone()
        .ok_or_else(|| SelectError::MissingAsset {
            kind,
            code: anchor.code.clone(),
        })?;
    Ok(ChoiceQuestion::named(kind, selection, Prompt::Flag(flag)))
}

/// "Which is the flag of <country>?" Labels double as alt text for the images.
pub fn country_to_flag<R: Rng + ?Sized>(
    catalog: &Catalog,
    rng: &mut R,
) -> Result<ChoiceQuestion, SelectError> {
    let kind = QuestionKind::CountryToFlag;
    let selection = select_for(kind, catalog, rng, eligible, |anchor, _| flag_options(anchor))?;
    let name = selection.anchor().name.clone();
    Ok(ChoiceQuestion::named(kind, selection, Prompt::Country(name)))
}
