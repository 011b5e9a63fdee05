use crate::model::Country;

/// Decides which countries may anchor a question.
pub trait Eligibility {
    fn eligible(&self, country: &Country) -> bool;
}

impl<F: Fn(&Country) -> bool> Eligibility for F {
    fn eligible(&self, country: &Country) -> bool {
        self(country)
    }
}

/// Built from a chosen anchor; decides which other countries may be shown
/// next to it as wrong answers.
///
/// The selector always keeps the anchor itself, so implementations only have
/// to reason about the other candidates.
pub trait Compatibility {
    fn admits(&self, candidate: &Country) -> bool;
}

impl<F: Fn(&Country) -> bool> Compatibility for F {
    fn admits(&self, candidate: &Country) -> bool {
        self(candidate)
    }
}

/// Any country is a valid distractor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Always;

impl Compatibility for Always {
    fn admits(&self, _candidate: &Country) -> bool {
        true
    }
}

/// Rejects candidates that form a listed pair with the anchor, in either order.
#[derive(Debug, Clone)]
pub struct ExcludedPairs {
    anchor: String,
    pairs: &'static [(&'static str, &'static str)],
}

impl ExcludedPairs {
    pub fn new(anchor: &Country, pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            anchor: anchor.code.clone(),
            pairs,
        }
    }
}

impl Compatibility for ExcludedPairs {
    fn admits(&self, candidate: &Country) -> bool {
        let (a, b) = (self.anchor.as_str(), candidate.code.as_str());
        !self
            .pairs
            .iter()
            .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
    }
}
